//! Types used for describing courses.

use chrono::NaiveDate;
use derive_more::Display;
use serde::Serialize;
use url::Url;

/// A single course in the catalog.
#[derive(Debug, Clone)]
pub struct Course {
	/// URL-safe identifier for this course.
	///
	/// Also the key this course is stored under in the
	/// [`CourseDirectory`](crate::courses::CourseDirectory), and part of its canonical URL.
	pub slug: String,

	/// The course's display name.
	pub name: String,

	/// A short description of the course.
	pub description: String,

	/// The organization offering the course.
	pub provider: CourseProvider,

	/// How advanced the course is.
	pub level: Level,

	/// Total duration, in hours.
	pub duration_hours: f64,

	/// How many lessons the course contains.
	pub lessons_count: u32,

	/// Average review rating, on a 0.0–5.0 scale.
	pub rating: f64,

	/// How many reviews [`rating`] is based on.
	///
	/// [`rating`]: Course::rating
	pub rating_count: u32,

	/// The course's price, in [`currency`].
	///
	/// [`currency`]: Course::currency
	pub price: f64,

	/// The currency the course is priced in.
	pub currency: Currency,

	/// The language the course is taught in.
	pub language: String,

	/// When the course content was last updated.
	pub last_updated: NaiveDate,
}

/// The organization offering a course.
#[derive(Debug, Clone)]
pub struct CourseProvider {
	/// The organization's display name.
	pub name: String,

	/// The organization's URL.
	pub url: Url,
}

/// How advanced a course is.
///
/// Serializes to the schema.org `educationalLevel` vocabulary.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
	/// Suitable for newcomers.
	#[display("Beginner")]
	Beginner,

	/// Assumes working knowledge of the fundamentals.
	#[display("Intermediate")]
	Intermediate,

	/// Assumes substantial prior experience.
	#[display("Advanced")]
	Advanced,
}

/// The currency a course is priced in.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
	/// US Dollars.
	#[display("USD")]
	Usd,

	/// Euros.
	#[display("EUR")]
	Eur,
}

impl Currency {
	/// The symbol prefixed to prices displayed in this currency.
	pub const fn symbol(self) -> &'static str {
		match self {
			Currency::Usd => "$",
			Currency::Eur => "€",
		}
	}
}
