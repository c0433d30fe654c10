//! schema.org structured data, serialized as JSON-LD.
//!
//! The types here mirror the schema.org vocabulary fragments the site emits. They are
//! embedded verbatim as an `application/ld+json` script in the document head.

use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

use crate::courses::Level;

/// A schema.org `Course` fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseJsonLd {
	/// Always `"https://schema.org"`.
	#[serde(rename = "@context")]
	pub context: &'static str,

	/// Always `"Course"`.
	#[serde(rename = "@type")]
	pub kind: &'static str,

	/// The course name.
	pub name: String,

	/// The course description.
	pub description: String,

	/// The organization offering the course.
	pub provider: Organization,

	/// The language the course is taught in.
	pub in_language: String,

	/// The course page's canonical URL.
	pub url: Url,

	/// When the course content was last updated.
	pub date_modified: NaiveDate,

	/// The course's review rating.
	pub aggregate_rating: AggregateRating,

	/// How advanced the course is.
	pub educational_level: Level,

	/// Total duration as an ISO-8601 duration (`"PT6H"`).
	pub time_required: String,
}

/// A schema.org `Organization` fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
	/// Always `"Organization"`.
	#[serde(rename = "@type")]
	pub kind: &'static str,

	/// The organization's display name.
	pub name: String,

	/// The organization's URL.
	#[serde(rename = "sameAs")]
	pub same_as: Url,
}

/// A schema.org `AggregateRating` fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
	/// Always `"AggregateRating"`.
	#[serde(rename = "@type")]
	pub kind: &'static str,

	/// The rating, formatted to exactly one decimal place.
	pub rating_value: String,

	/// How many reviews the rating is based on.
	pub review_count: u32,
}
