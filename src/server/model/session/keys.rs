use tower_sessions::cookie::Key;

use crate::server::config::SessionSecrets;

/// Signing keys for the session cookie.
///
/// Each key is derived from one configured secret; `primary` signs outgoing cookies and
/// `legacy` keys are only tried when verifying incoming ones.
#[derive(Clone)]
pub struct SessionKeys {
    primary: Key,
    legacy: Vec<Key>,
}

impl SessionKeys {
    pub fn from_secrets(secrets: &SessionSecrets) -> Self {
        Self {
            primary: derive_key(secrets.primary()),
            legacy: secrets
                .legacy()
                .iter()
                .map(|secret| derive_key(secret))
                .collect(),
        }
    }

    pub fn primary(&self) -> &Key {
        &self.primary
    }

    pub fn legacy(&self) -> &[Key] {
        &self.legacy
    }
}

// Secrets are validated to be at least 32 bytes, the minimum `derive_from` accepts.
fn derive_key(secret: &str) -> Key {
    Key::derive_from(secret.as_bytes())
}
