mod resolve;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlanningCommands;

/// Handle `vgl planning <subcommand>`.
pub async fn handle(
    action: &PlanningCommands,
    flags: &GlobalFlags,
    config: &vig_config::VigConfig,
) -> anyhow::Result<()> {
    match action {
        PlanningCommands::Show(args) => show::handle(args, flags, config).await,
        PlanningCommands::Resolve(args) => resolve::handle(args, flags, config).await,
    }
}
