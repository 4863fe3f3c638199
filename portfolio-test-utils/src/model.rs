//! Database model type aliases matching those used by the portfolio crate.

/// Type alias for the user database model.
pub type UserModel = entity::portfolio_user::Model;

/// Type alias for the task database model.
pub type TaskModel = entity::portfolio_task::Model;
