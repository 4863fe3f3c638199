use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use dioxus_logger::tracing;
use rand::RngCore;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::user::{LoginDto, RegisterDto, UserDto, UserStatus},
    server::{
        data::user::{NewUser, UserRepository},
        error::{auth::AuthError, Error},
        model::db::UserModel,
        service::password::{hash_password, verify_dummy_password, verify_password},
    },
};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MAX_NAME_LEN: usize = 100;

const CONFIRMATION_TOKEN_BYTES: usize = 32;

/// Service for account registration, login and confirmation.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    app_url: &'a str,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    ///
    /// `app_url` is the public base URL confirmation links are built from.
    pub fn new(db: &'a DatabaseConnection, app_url: &'a str) -> Self {
        Self { db, app_url }
    }

    /// Registers a new unconfirmed account
    ///
    /// The confirmation link is written to the log rather than mailed.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account, status `Unconfirmed`
    /// - `Err(AuthError::InvalidRegistration)` - Email, name or password failed validation
    /// - `Err(AuthError::EmailTaken)` - An account already uses this email
    pub async fn register(&self, registration: RegisterDto) -> Result<UserDto, Error> {
        let registration = validate_registration(registration)?;
        let user_repository = UserRepository::new(self.db);

        if user_repository
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&registration.password).await?;
        let confirmation_token = generate_confirmation_token();

        let user = user_repository
            .create(NewUser {
                email: &registration.email,
                name: &registration.name,
                password_hash: &password_hash,
                confirmation_token: &confirmation_token,
            })
            .await
            .map_err(email_conflict)?;

        tracing::info!(user_id = %user.id, "Registered new account");
        tracing::info!(
            user_id = %user.id,
            "Confirmation link for {}: {}/confirm?token={}",
            user.email,
            self.app_url,
            confirmation_token
        );

        Ok(user_to_dto(user))
    }

    /// Verifies the credentials of an account
    ///
    /// Unknown emails, wrong passwords and disabled accounts are indistinguishable to the
    /// caller, unknown emails still pay for a password verification. Unconfirmed accounts may
    /// log in.
    pub async fn login(&self, credentials: LoginDto) -> Result<UserDto, Error> {
        let email = normalize_email(&credentials.email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            verify_dummy_password(&credentials.password).await;

            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.status == entity::portfolio_user::UserStatus::Disabled {
            tracing::debug!(user_id = %user.id, "Rejected login for disabled account");

            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user_to_dto(user))
    }

    /// Confirms the account holding `token`
    ///
    /// Tokens are single use: confirming clears the token so a second attempt fails.
    pub async fn confirm(&self, token: &str) -> Result<UserDto, Error> {
        let user_repository = UserRepository::new(self.db);

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::InvalidConfirmationToken.into());
        }

        let Some(user) = user_repository.find_by_confirmation_token(token).await? else {
            return Err(AuthError::InvalidConfirmationToken.into());
        };

        if user.status != entity::portfolio_user::UserStatus::Unconfirmed {
            return Err(AuthError::InvalidConfirmationToken.into());
        }

        let Some(user) = user_repository.confirm(user.id).await? else {
            return Err(AuthError::InvalidConfirmationToken.into());
        };

        tracing::info!(user_id = %user.id, "Confirmed account");

        Ok(user_to_dto(user))
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;

        Ok(user.map(user_to_dto))
    }

    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).list().await?;

        Ok(users.into_iter().map(user_to_dto).collect())
    }
}

/// Normalizes and validates a registration
///
/// Emails are trimmed and lowercased, names trimmed. Passwords are taken as given.
pub fn validate_registration(registration: RegisterDto) -> Result<RegisterDto, AuthError> {
    let email = normalize_email(&registration.email);
    let name = registration.name.trim().to_string();
    let password = registration.password;

    if !is_plausible_email(&email) {
        return Err(AuthError::InvalidRegistration(
            "Please enter a valid email address.".to_string(),
        ));
    }

    let name_len = name.chars().count();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Err(AuthError::InvalidRegistration(format!(
            "Name must be between 1 and {} characters.",
            MAX_NAME_LEN
        )));
    }

    let password_len = password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&password_len) {
        return Err(AuthError::InvalidRegistration(format!(
            "Password must be between {} and {} characters.",
            MIN_PASSWORD_LEN, MAX_PASSWORD_LEN
        )));
    }

    Ok(RegisterDto {
        email,
        name,
        password,
    })
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// Deliverability is proven by the confirmation link, this only rejects obvious typos.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

fn generate_confirmation_token() -> String {
    let mut bytes = [0u8; CONFIRMATION_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}

/// Two registrations racing for the same email both pass the lookup, the unique index decides.
fn email_conflict(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::EmailTaken.into(),
        _ => err.into(),
    }
}

fn user_to_dto(user: UserModel) -> UserDto {
    let status = match user.status {
        entity::portfolio_user::UserStatus::Unconfirmed => UserStatus::Unconfirmed,
        entity::portfolio_user::UserStatus::Confirmed => UserStatus::Confirmed,
        entity::portfolio_user::UserStatus::Disabled => UserStatus::Disabled,
    };

    UserDto {
        id: user.id,
        email: user.email,
        name: user.name,
        status,
        is_admin: user.is_admin,
    }
}
