use anyhow::Context;
use clap::Parser;

use quad_client::SearchClient;
use quad_config::QuadConfig;

mod cli;
mod commands;

/// Dev-server default, used when no base URL is configured anywhere.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("quad error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = QuadConfig::load_with_dotenv().context("failed to load configuration")?;
    let base_url = resolve_base_url(cli.base_url.as_deref(), &config);
    tracing::debug!(%base_url, "resolved backend base URL");
    let client = SearchClient::new(&base_url);

    match &cli.command {
        cli::Commands::Search(args) => commands::search::handle(args, &client, &config).await,
        cli::Commands::Schools => commands::schools::handle(),
        cli::Commands::Health => commands::health::handle(&client).await,
    }
}

/// Pick the backend base URL: `--base-url` flag, then config, then the
/// dev-server default.
fn resolve_base_url(flag: Option<&str>, config: &QuadConfig) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    if config.search.is_configured() {
        return config.search.base_url().to_string();
    }
    DEFAULT_BASE_URL.to_string()
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("QUAD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
