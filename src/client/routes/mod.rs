pub mod about;
pub mod auth;
pub mod home;
pub mod map;
pub mod not_found;
pub mod privacy;
pub mod products;
pub mod resume;
pub mod tasks;

pub use about::About;
pub use auth::{Confirm, Login, Register};
pub use home::Home;
pub use map::LocationMap;
pub use not_found::NotFound;
pub use privacy::PrivacyPolicy;
pub use products::Products;
pub use resume::Resume;
pub use tasks::Tasks;
