//! Everything related to courses.
//!
//! The [`models`] submodule holds the record types, and [`CourseDirectory`] is the lookup
//! backing the course pages.

pub mod models;
pub use models::{Course, CourseProvider, Currency, Level};

mod directory;
pub use directory::CourseDirectory;
