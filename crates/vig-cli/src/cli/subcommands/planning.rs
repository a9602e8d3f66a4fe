use clap::{Args, Subcommand};

/// Planning-calendar commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlanningCommands {
    /// Render the month grid of planning entries.
    Show(PlanningShowArgs),
    /// Resolve one calendar day to its document-collection id.
    Resolve(PlanningResolveArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PlanningShowArgs {
    /// Month 1-12. Defaults to the current month.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12), requires = "year")]
    pub month: Option<u32>,
    /// Four-digit year. Defaults to the current year.
    #[arg(long, requires = "month")]
    pub year: Option<i32>,
    /// Browse another inspector's planning (supervisors only).
    #[arg(long)]
    pub inspector: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct PlanningResolveArgs {
    /// Calendar day, `YYYY-MM-DD`.
    #[arg(long)]
    pub date: String,
    /// Resolve against another inspector's planning (supervisors only).
    #[arg(long)]
    pub inspector: Option<i64>,
}
