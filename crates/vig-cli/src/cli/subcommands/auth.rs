use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with an email/password pair.
    Login(AuthLoginArgs),
    /// Notify the service and clear stored credentials.
    Logout,
    /// Show current session status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,
    /// Account password. Prompted on stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}
