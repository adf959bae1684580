use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `quad` binary.
#[derive(Debug, Parser)]
#[command(name = "quad", version, about = "quad - course search from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config and QUAD_SEARCH__BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search for courses
    Search(SearchArgs),
    /// List the selectable schools
    Schools,
    /// Probe the backend's health endpoint
    Health,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text course query
    pub query: String,

    /// School short name; ALL searches every school
    #[arg(short, long, default_value = quad_core::ALL_SCHOOLS)]
    pub school: String,

    /// Max results (the backend clamps to 1..=50)
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Print rows as JSON instead of course cards
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_defaults_to_all_schools() {
        let cli = Cli::parse_from(["quad", "search", "intro to databases"]);
        let Commands::Search(args) = &cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.query, "intro to databases");
        assert_eq!(args.school, "ALL");
        assert_eq!(args.limit, None);
        assert!(!args.json);
    }

    #[test]
    fn search_flags_parse() {
        let cli = Cli::parse_from([
            "quad", "search", "compilers", "--school", "uiuc", "--limit", "5", "--json",
        ]);
        let Commands::Search(args) = &cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.school, "uiuc");
        assert_eq!(args.limit, Some(5));
        assert!(args.json);
    }

    #[test]
    fn global_base_url_applies_to_subcommands() {
        let cli = Cli::parse_from(["quad", "health", "--base-url", "http://x:1"]);
        assert!(matches!(cli.command, Commands::Health));
        assert_eq!(cli.base_url.as_deref(), Some("http://x:1"));
    }
}
