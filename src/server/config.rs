//! Server configuration loaded from environment variables.

use crate::server::error::config::ConfigError;

/// Minimum length of a session secret, the signing key is derived from it.
pub const MIN_SESSION_SECRET_LEN: usize = 32;

/// Deployment environment, controls whether cookies require HTTPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidEnvValue {
                var: "APP_ENV".to_string(),
                reason: format!(
                    "expected `production` or `development`, found `{}`",
                    other
                ),
            }),
        }
    }

    pub fn secure_cookies(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Ordered list of session cookie secrets.
///
/// The first secret signs new cookies, every secret is accepted when verifying so older secrets
/// can be retired without logging everyone out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSecrets(Vec<String>);

impl SessionSecrets {
    /// Parse a comma-separated secret list, ignoring empty entries.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let secrets: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|secret| !secret.is_empty())
            .map(str::to_string)
            .collect();

        if secrets.is_empty() {
            return Err(ConfigError::NoSessionSecrets);
        }

        if let Some(position) = secrets
            .iter()
            .position(|secret| secret.len() < MIN_SESSION_SECRET_LEN)
        {
            return Err(ConfigError::SessionSecretTooShort {
                position: position + 1,
                min_len: MIN_SESSION_SECRET_LEN,
            });
        }

        Ok(Self(secrets))
    }

    /// Secret used to sign new cookies.
    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    /// Secrets only accepted for verification.
    pub fn legacy(&self) -> &[String] {
        &self.0[1..]
    }
}

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub session_secrets: SessionSecrets,
    pub app_url: String,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match std::env::var("APP_ENV") {
            Ok(value) => Environment::parse(&value)?,
            Err(_) => Environment::Development,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            session_secrets: SessionSecrets::parse(&required_var("SESSION_SECRETS")?)?,
            app_url: parse_app_url(&required_var("APP_URL")?)?,
            environment,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Validate the public base URL, trailing slashes are removed.
pub fn parse_app_url(value: &str) -> Result<String, ConfigError> {
    let url = value.trim().trim_end_matches('/');

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvValue {
            var: "APP_URL".to_string(),
            reason: "must start with http:// or https://".to_string(),
        });
    }

    Ok(url.to_string())
}
