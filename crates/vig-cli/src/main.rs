use clap::Parser;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("vgl error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = vig_config::VigConfig::load_with_dotenv()?;
    let flags = cli::GlobalFlags {
        json: cli.json || config.general.json_output,
    };

    match &cli.command {
        cli::Commands::Auth { action } => commands::auth::handle(action, &flags, &config).await,
        cli::Commands::Planning { action } => {
            commands::planning::handle(action, &flags, &config).await
        }
        cli::Commands::Calendar { action } => {
            commands::calendar::handle(action, &flags, &config).await
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VIGIL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
