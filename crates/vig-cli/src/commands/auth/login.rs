use std::io::Write as _;

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::commands::shared;
use crate::output::emit;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    email: String,
    role: &'static str,
    destination: Option<&'static str>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &vig_config::VigConfig,
) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt_password()?,
    };

    let mut session = shared::session_manager(config)?;
    let destination = session.login(&args.email, &password).await?;

    let role = session
        .session()
        .identity()
        .map_or("unknown", |identity| identity.role.as_str());

    let response = AuthLoginResponse {
        authenticated: session.is_authenticated(),
        email: args.email.clone(),
        role,
        destination: destination.map(vig_auth::Destination::path),
    };

    let text = destination.map_or_else(
        || format!("signed in as {} ({role}), no screen mapped for this role", args.email),
        |destination| format!("signed in as {} ({role}), continue at {}", args.email, destination.path()),
    );
    emit(&response, flags.json, &text)
}

fn prompt_password() -> anyhow::Result<String> {
    eprint!("password: ");
    std::io::stderr().flush()?;
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}
