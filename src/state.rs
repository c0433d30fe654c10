//! The site's main application state.
//!
//! This is initialized once on startup, and then passed around the application by axum.

use crate::courses::CourseDirectory;
use crate::Config;

/// The main application state.
///
/// A `'static` reference to this is passed around the application.
#[derive(Debug)]
pub struct State {
	/// The site configuration.
	pub config: Config,

	/// The directory backing `/course/:slug` lookups.
	///
	/// Built once here and never mutated, so any number of in-flight requests can read it
	/// without synchronization.
	pub courses: CourseDirectory,
}

impl State {
	/// Creates a new [`State`] object and leaks it on the heap.
	///
	/// **This function should only ever be called once; it leaks memory.**
	pub fn new(config: Config) -> &'static Self {
		let courses = CourseDirectory::with_seed_courses();

		Box::leak(Box::new(Self { config, courses }))
	}
}
