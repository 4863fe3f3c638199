pub use super::portfolio_task::Entity as PortfolioTask;
pub use super::portfolio_user::Entity as PortfolioUser;
