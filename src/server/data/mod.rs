//! Data access layer repositories.
//!
//! Repositories are thin wrappers over sea-orm queries, one per table. They are generic over
//! [`ConnectionTrait`](sea_orm::ConnectionTrait) so they work with both plain connections and
//! transactions.

pub mod task;
pub mod user;
