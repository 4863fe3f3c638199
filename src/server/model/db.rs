//! Database model type aliases.

/// Account record, see `entity::portfolio_user`.
pub type UserModel = entity::portfolio_user::Model;

/// Task list entry owned by a user.
pub type TaskModel = entity::portfolio_task::Model;
