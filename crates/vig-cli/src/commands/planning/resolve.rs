use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use vig_planning::{MonthCursor, resolve_day};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlanningResolveArgs;
use crate::commands::shared;
use crate::output::emit;

#[derive(Serialize)]
struct PlanningResolveResponse {
    date: String,
    planning_id: Option<i64>,
    document_count: Option<u32>,
}

pub async fn handle(
    args: &PlanningResolveArgs,
    flags: &GlobalFlags,
    config: &vig_config::VigConfig,
) -> anyhow::Result<()> {
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .with_context(|| format!("invalid --date '{}': expected YYYY-MM-DD", args.date))?;

    let mut session = shared::bootstrapped_session(config).await?;
    shared::require_screen(&session, "/documents")?;

    let client = shared::planning_client(config)?;
    let records = match args.inspector {
        Some(id) => client.fetch_for_inspector(&mut session, id).await?,
        None => client.fetch_own(&mut session).await?,
    };

    let cursor = MonthCursor {
        month: date.month(),
        year: date.year(),
    };
    let resolved = resolve_day(&records, cursor, date.day());

    let response = PlanningResolveResponse {
        date: args.date.clone(),
        planning_id: resolved.map(|record| record.id),
        document_count: resolved.map(|record| record.document_count),
    };
    let text = resolved.map_or_else(
        || format!("no planning entry on {}, nothing to open", args.date),
        |record| format!("planning entry {} on {}, documents at /documents/{}", record.id, args.date, record.id),
    );
    emit(&response, flags.json, &text)
}
