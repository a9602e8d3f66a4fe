use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::output::emit;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    destination: &'static str,
}

pub async fn handle(flags: &GlobalFlags, config: &vig_config::VigConfig) -> anyhow::Result<()> {
    let mut session = shared::bootstrapped_session(config).await?;
    let destination = session.logout().await;

    let response = AuthLogoutResponse {
        cleared: true,
        destination: destination.path(),
    };
    emit(&response, flags.json, "signed out, credentials cleared")
}
