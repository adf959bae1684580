//! `quad search` — run one search through the session lifecycle and render
//! the outcome.

use anyhow::bail;

use quad_client::SearchClient;
use quad_config::QuadConfig;
use quad_core::{CourseRow, School, SearchStatus};
use quad_session::SearchSession;

use crate::cli::SearchArgs;

pub async fn handle(
    args: &SearchArgs,
    client: &SearchClient,
    config: &QuadConfig,
) -> anyhow::Result<()> {
    let Some(school) = School::find(&args.school) else {
        bail!(
            "unknown school '{}' (run `quad schools` for the list)",
            args.school
        );
    };
    let school = school.short_name;
    let limit = args.limit.unwrap_or(config.search.default_limit);

    // One search at a time: start, await, then record the outcome. Because
    // the calls are strictly sequential there is no stale-response race to
    // guard against here.
    let session = SearchSession::new();
    session.start(&args.query, school);
    match client.search_with_limit(&args.query, school, Some(limit)).await {
        Ok(rows) => session.succeed(&args.query, school, rows),
        Err(error) => session.fail(&args.query, school, error.to_string()),
    }

    let state = session.snapshot();
    if state.status == SearchStatus::Error {
        bail!("{}", state.error.as_deref().unwrap_or("search failed"));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state.results)?);
        return Ok(());
    }

    if state.results.is_empty() {
        println!("No courses found.");
        return Ok(());
    }

    for row in &state.results {
        println!("{}", render_card(row));
    }
    Ok(())
}

/// Render one course card, tuple fields 0-4 or the matching object keys:
/// subject, number, name, description, credit hours.
fn render_card(row: &CourseRow) -> String {
    let subject = row.field_text(0, "subject").unwrap_or_default();
    let number = row.field_text(1, "number").unwrap_or_default();
    let name = row.field_text(2, "name").unwrap_or_default();
    let description = row.field_text(3, "description").unwrap_or_default();
    let hours = row.field_text(4, "credit_hours").unwrap_or_default();

    let mut card = format!("{subject} {number}: {name}\n");
    if !description.is_empty() {
        card.push_str(&description);
        card.push('\n');
    }
    if !hours.is_empty() {
        card.push_str(&format!("{hours} hour(s).\n"));
    }
    card
}
