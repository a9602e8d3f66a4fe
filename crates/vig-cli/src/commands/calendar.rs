use serde::Serialize;
use vig_core::Inspector;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CalendarCommands;
use crate::commands::shared;
use crate::output::emit;

#[derive(Serialize)]
struct CalendarListResponse {
    inspectors: Vec<Inspector>,
}

/// Handle `vgl calendar <subcommand>`.
pub async fn handle(
    action: &CalendarCommands,
    flags: &GlobalFlags,
    config: &vig_config::VigConfig,
) -> anyhow::Result<()> {
    match action {
        CalendarCommands::List => list(flags, config).await,
    }
}

async fn list(flags: &GlobalFlags, config: &vig_config::VigConfig) -> anyhow::Result<()> {
    let mut session = shared::bootstrapped_session(config).await?;
    shared::require_screen(&session, "/calendar")?;

    let client = shared::planning_client(config)?;
    let inspectors = client.list_inspectors(&mut session).await?;

    let text = if inspectors.is_empty() {
        "no inspectors to browse".to_string()
    } else {
        inspectors
            .iter()
            .map(|inspector| format!("{:>6}  {}", inspector.id, inspector.full_name()))
            .collect::<Vec<_>>()
            .join("\n")
    };
    emit(&CalendarListResponse { inspectors }, flags.json, &text)
}
