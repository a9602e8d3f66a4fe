//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit JSON instead of human-readable output by default.
    #[serde(default)]
    pub json_output: bool,
}
