pub mod footer;
pub mod guard;
pub mod layout;
pub mod navbar;
pub mod page;

pub use footer::Footer;
pub use guard::{RequireAuthenticated, RestrictAuthenticated};
pub use layout::{ContentLayout, FormLayout};
pub use navbar::Navbar;
pub use page::Page;
