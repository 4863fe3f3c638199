pub mod user;

pub use user::{use_optional_user, use_user};
