use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::output::emit;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    email: Option<String>,
    role: Option<&'static str>,
    user_id: Option<i64>,
    is_superuser: bool,
}

pub async fn handle(flags: &GlobalFlags, config: &vig_config::VigConfig) -> anyhow::Result<()> {
    let session = shared::bootstrapped_session(config).await?;

    let status = session.session().identity().map_or(
        AuthStatusResponse {
            authenticated: false,
            email: None,
            role: None,
            user_id: None,
            is_superuser: false,
        },
        |identity| AuthStatusResponse {
            authenticated: true,
            email: Some(identity.email.clone()),
            role: Some(identity.role.as_str()),
            user_id: Some(identity.id),
            is_superuser: identity.is_superuser,
        },
    );

    let text = if status.authenticated {
        format!(
            "signed in as {} ({})",
            status.email.as_deref().unwrap_or_default(),
            status.role.unwrap_or_default(),
        )
    } else {
        "not signed in".to_string()
    };
    emit(&status, flags.json, &text)
}
