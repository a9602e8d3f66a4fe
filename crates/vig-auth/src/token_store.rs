//! Durable persistence of session credentials.
//!
//! Exactly four string values survive a restart: access token, refresh
//! token, user id, role. Stored as one JSON document in the OS keychain,
//! with a file fallback (`~/.vigil/credentials`) when the keyring is
//! unavailable. No schema versioning.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "vigil-cli";
const KEYRING_USER: &str = "session";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// The four persisted session values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
    pub role: String,
}

/// Tiered credential storage: keyring first, file fallback.
///
/// The Session Manager is the only writer. Readers treat absence of stored
/// values as "unauthenticated", never as an error.
#[derive(Debug, Clone)]
pub struct TokenStore {
    service: String,
    file_path: Option<PathBuf>,
    use_keyring: bool,
}

impl TokenStore {
    /// Store backed by the OS keychain with a file fallback under the home
    /// directory.
    ///
    /// The keyring service name defaults to `"vigil-cli"`. Override via
    /// `VIGIL_KEYRING_SERVICE` (e.g. `"vigil-cli-test"`) to avoid touching
    /// production credentials during testing.
    #[must_use]
    pub fn new() -> Self {
        let service = std::env::var("VIGIL_KEYRING_SERVICE")
            .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());
        Self {
            service,
            file_path: dirs::home_dir().map(|h| h.join(".vigil").join(CREDENTIALS_FILE_NAME)),
            use_keyring: true,
        }
    }

    /// File-only store rooted in `dir`. Used by tests so no keychain entry
    /// is ever created.
    #[must_use]
    pub fn file_only(dir: &std::path::Path) -> Self {
        Self {
            service: DEFAULT_KEYRING_SERVICE.to_string(),
            file_path: Some(dir.join(CREDENTIALS_FILE_NAME)),
            use_keyring: false,
        }
    }

    /// Persist credentials. Keyring first; falls back to the file when the
    /// keyring is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStore`] if both keyring and file storage fail.
    pub fn store(&self, credentials: &StoredCredentials) -> Result<(), AuthError> {
        let payload = serde_json::to_string(credentials)
            .map_err(|e| AuthError::TokenStore(format!("serialize credentials: {e}")))?;

        if self.use_keyring {
            match keyring::Entry::new(&self.service, KEYRING_USER) {
                Ok(entry) => match entry.set_password(&payload) {
                    Ok(()) => return Ok(()),
                    Err(error) => {
                        tracing::warn!(%error, "keyring store failed; falling back to file");
                    }
                },
                Err(error) => {
                    tracing::warn!(%error, "keyring unavailable; falling back to file");
                }
            }
        }

        self.store_file(&payload)
    }

    /// Load credentials. Priority: keyring → file. Returns `None` when
    /// nothing usable is stored.
    #[must_use]
    pub fn load(&self) -> Option<StoredCredentials> {
        if self.use_keyring
            && let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
            && let Ok(payload) = entry.get_password()
            && let Some(credentials) = parse_credentials(&payload)
        {
            return Some(credentials);
        }

        self.load_file()
    }

    /// Delete stored credentials from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStore`] if the credentials file cannot be
    /// removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        // Delete from keyring (ignore errors; the entry may not exist)
        if self.use_keyring
            && let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
        {
            let _ = entry.delete_credential();
        }

        if let Some(path) = &self.file_path
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| {
                AuthError::TokenStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    // --- Private file helpers ---

    fn store_file(&self, payload: &str) -> Result<(), AuthError> {
        let Some(path) = &self.file_path else {
            return Err(AuthError::TokenStore(
                "home directory not found, cannot store credentials".into(),
            ));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(path, payload)
            .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStore(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn load_file(&self) -> Option<StoredCredentials> {
        let path = self.file_path.as_ref()?;
        let payload = fs::read_to_string(path).ok()?;
        parse_credentials(&payload)
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_credentials(payload: &str) -> Option<StoredCredentials> {
    let credentials: StoredCredentials = serde_json::from_str(payload).ok()?;
    if credentials.access_token.is_empty() {
        return None;
    }
    Some(credentials)
}
