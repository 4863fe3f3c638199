//! User fixtures.

pub mod factory;

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use entity::portfolio_user::UserStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, model::UserModel, TestContext};

static TEST_PASSWORD_HASH: OnceLock<String> = OnceLock::new();

/// Argon2id hash of [`TEST_PASSWORD`], computed once per test binary.
pub fn test_password_hash() -> Result<String, TestError> {
    if let Some(hash) = TEST_PASSWORD_HASH.get() {
        return Ok(hash.clone());
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(TEST_PASSWORD.as_bytes(), &salt)
        .map_err(|e| TestError::PasswordHash(e.to_string()))?
        .to_string();

    Ok(TEST_PASSWORD_HASH.get_or_init(|| hash).clone())
}

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a non-admin user with the given status.
    pub async fn insert_user(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<UserModel, TestError> {
        self.insert_user_with(email, status, false).await
    }

    /// Insert an unconfirmed user holding `token` as its confirmation token.
    pub async fn insert_unconfirmed_user_with_token(
        &self,
        email: &str,
        token: &str,
    ) -> Result<UserModel, TestError> {
        self.insert(email, UserStatus::Unconfirmed, false, Some(token.to_string()))
            .await
    }

    pub async fn insert_user_with(
        &self,
        email: &str,
        status: UserStatus,
        is_admin: bool,
    ) -> Result<UserModel, TestError> {
        self.insert(email, status, is_admin, None).await
    }

    async fn insert(
        &self,
        email: &str,
        status: UserStatus,
        is_admin: bool,
        confirmation_token: Option<String>,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();
        let confirmed_at = match status {
            UserStatus::Confirmed => Some(now),
            _ => None,
        };

        Ok(
            entity::prelude::PortfolioUser::insert(entity::portfolio_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                name: ActiveValue::Set("Test User".to_string()),
                password_hash: ActiveValue::Set(test_password_hash()?),
                status: ActiveValue::Set(status),
                is_admin: ActiveValue::Set(is_admin),
                confirmation_token: ActiveValue::Set(confirmation_token),
                created_at: ActiveValue::Set(now),
                confirmed_at: ActiveValue::Set(confirmed_at),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
