pub mod subcommands;

use clap::{Parser, Subcommand};

use subcommands::{AuthCommands, CalendarCommands, PlanningCommands};

/// Command-line front end for the vigil inspection workflow.
#[derive(Debug, Parser)]
#[command(name = "vgl", version, about)]
pub struct Cli {
    /// Emit JSON instead of human-readable output.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors.
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log at debug level.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Session commands: login, status, logout.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Planning screens: month grid and single-day resolution.
    Planning {
        #[command(subcommand)]
        action: PlanningCommands,
    },
    /// Supervisor's inspector calendar overview.
    Calendar {
        #[command(subcommand)]
        action: CalendarCommands,
    },
}

/// Flags every handler receives, resolved from the CLI and config defaults.
#[derive(Debug, Clone, Copy)]
pub struct GlobalFlags {
    pub json: bool,
}
