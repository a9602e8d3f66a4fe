use serde::Serialize;
use vig_planning::{CalendarSlot, MonthCursor, month_grid};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlanningShowArgs;
use crate::commands::shared;
use crate::output::{emit, grid::render_month_grid};

#[derive(Serialize)]
struct PlanningShowResponse {
    month: u32,
    year: i32,
    slots: Vec<CalendarSlot>,
}

pub async fn handle(
    args: &PlanningShowArgs,
    flags: &GlobalFlags,
    config: &vig_config::VigConfig,
) -> anyhow::Result<()> {
    let mut session = shared::bootstrapped_session(config).await?;
    let screen = match args.inspector {
        Some(id) => format!("/calendar/{id}"),
        None => "/planning".to_string(),
    };
    shared::require_screen(&session, &screen)?;

    let cursor = match (args.month, args.year) {
        (Some(month), Some(year)) => MonthCursor { month, year },
        _ => MonthCursor::current(),
    };

    let client = shared::planning_client(config)?;
    let records = match args.inspector {
        Some(id) => client.fetch_for_inspector(&mut session, id).await?,
        None => client.fetch_own(&mut session).await?,
    };

    let slots = month_grid(&records, cursor);
    let text = render_month_grid(cursor, &slots);
    let response = PlanningShowResponse {
        month: cursor.month,
        year: cursor.year,
        slots,
    };
    emit(&response, flags.json, &text)
}
