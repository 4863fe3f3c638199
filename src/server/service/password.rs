//! Argon2id password hashing.
//!
//! Hashing is deliberately slow, so all work runs on tokio's blocking pool instead of the
//! worker thread serving the request.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::auth::AuthError;

const DUMMY_PASSWORD: &str = "portfolio-login-timing-password";

/// Hash a password with Argon2id, returning the PHC string stored on the user.
pub async fn hash_password(password: &str) -> Result<String, AuthError> {
    let password = password.to_owned();

    run_blocking(move || hash_blocking(&password)).await
}

/// Check `password` against a stored PHC string.
///
/// A mismatch is `Ok(false)`, only a malformed stored hash is an error.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    run_blocking(move || verify_blocking(&password, &hash)).await
}

/// Run a full verification against a fixed hash and discard the result.
///
/// Used where there is no stored hash to check, so a login for an unknown email costs the same
/// as one with a wrong password.
pub async fn verify_dummy_password(password: &str) {
    let password = password.to_owned();

    let _ = run_blocking(move || verify_blocking(&password, dummy_hash()?)).await;
}

async fn run_blocking<T, F>(work: F) -> Result<T, AuthError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?
}

fn hash_blocking(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

fn verify_blocking(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

// Computed on first use with the same parameters as real hashes.
fn dummy_hash() -> Result<&'static str, AuthError> {
    static DUMMY_HASH: OnceLock<String> = OnceLock::new();

    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash);
    }

    let hash = hash_blocking(DUMMY_PASSWORD)?;

    Ok(DUMMY_HASH.get_or_init(|| hash))
}
