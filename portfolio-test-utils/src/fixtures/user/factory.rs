//! In-memory user models for unit tests that never touch the database.

use chrono::Utc;
use entity::portfolio_user::UserStatus;

use crate::model::UserModel;

/// Create a user model with standard test values.
pub fn mock_user_model(user_id: i32, status: UserStatus) -> UserModel {
    let now = Utc::now().naive_utc();

    UserModel {
        id: user_id,
        email: format!("user{}@example.com", user_id),
        name: "Test User".to_string(),
        password_hash: String::new(),
        status,
        is_admin: false,
        confirmation_token: None,
        created_at: now,
        confirmed_at: None,
    }
}
