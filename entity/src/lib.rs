pub mod prelude;

pub mod portfolio_task;
pub mod portfolio_user;
