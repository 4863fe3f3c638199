pub mod confirm;
pub mod login;
pub mod register;

pub use confirm::Confirm;
pub use login::Login;
pub use register::Register;
