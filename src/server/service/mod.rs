//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories and convert database models into the DTOs
//! returned by the API. Account registration, login and confirmation live in [`user`], the
//! task list in [`task`].

pub mod password;
pub mod task;
pub mod user;
