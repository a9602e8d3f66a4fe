use clap::Subcommand;

/// Supervisor calendar commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CalendarCommands {
    /// List the inspectors whose calendars can be browsed.
    List,
}
