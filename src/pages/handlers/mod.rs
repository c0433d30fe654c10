//! Handlers for the site's routes.

mod home;
pub use home::home;

mod course;
pub use course::course;
