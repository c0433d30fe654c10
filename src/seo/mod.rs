//! SEO metadata and structured-data derivation.
//!
//! Everything in this module is a pure function of a [`Course`] record; deriving twice from
//! the same record produces identical output. There is no error path; a slug that does not
//! resolve is handled by the caller, which uses [`not_found_metadata()`] and skips structured
//! data entirely.

use url::Url;

use crate::courses::Course;

pub mod models;
pub use models::{OgImage, OpenGraph, PageMetadata, TwitterCard};

pub mod json_ld;
pub use json_ld::CourseJsonLd;

/// `og:locale` for every page; the site is English-only.
const LOCALE: &str = "en_US";

/// The site's display name.
const SITE_NAME: &str = "Course Platform";

/// The site-wide description.
const SITE_DESCRIPTION: &str = "Discover high-quality courses to level up your skills.";

/// Derives the site-wide metadata.
///
/// This is the "parent" context that page-level metadata composes with; see
/// [`course_metadata()`].
pub fn site_metadata(base: &Url) -> PageMetadata {
	PageMetadata {
		title: String::from(SITE_NAME),
		description: String::from(SITE_DESCRIPTION),
		canonical: None,
		open_graph: Some(OpenGraph {
			title: String::from(SITE_NAME),
			description: String::from(SITE_DESCRIPTION),
			url: base.clone(),
			kind: "website",
			site_name: String::from(SITE_NAME),
			locale: LOCALE,
			images: Vec::new(),
		}),
		twitter: None,
	}
}

/// Derives a course page's metadata from the site-wide `parent` metadata.
///
/// The composition is additive, not a replacement: the fallback Open Graph image is appended
/// after any images the parent already carries.
pub fn course_metadata(parent: &PageMetadata, base: &Url, course: &Course) -> PageMetadata {
	let title = format!("{} | {}", course.name, course.provider.name);
	let description = course.description.clone();
	let url = course_url(base, &course.slug);

	let mut images = parent
		.open_graph
		.as_ref()
		.map(|open_graph| open_graph.images.clone())
		.unwrap_or_default();

	images.push(OgImage {
		url: fallback_og_image(base),
		width: 1200,
		height: 630,
		alt: course.name.clone(),
	});

	PageMetadata {
		title: title.clone(),
		description: description.clone(),
		canonical: Some(url.clone()),
		open_graph: Some(OpenGraph {
			title: title.clone(),
			description: description.clone(),
			url,
			kind: "article",
			site_name: course.provider.name.clone(),
			locale: LOCALE,
			images,
		}),
		twitter: Some(TwitterCard {
			card: "summary_large_image",
			title,
			description,
		}),
	}
}

/// The fixed fallback metadata for slugs that do not resolve.
pub fn not_found_metadata() -> PageMetadata {
	PageMetadata {
		title: String::from("Course not found"),
		description: String::from("The course you are looking for could not be found."),
		canonical: None,
		open_graph: None,
		twitter: None,
	}
}

/// Derives the schema.org `Course` fragment for a course page.
pub fn course_json_ld(base: &Url, course: &Course) -> CourseJsonLd {
	CourseJsonLd {
		context: "https://schema.org",
		kind: "Course",
		name: course.name.clone(),
		description: course.description.clone(),
		provider: json_ld::Organization {
			kind: "Organization",
			name: course.provider.name.clone(),
			same_as: course.provider.url.clone(),
		},
		in_language: course.language.clone(),
		url: course_url(base, &course.slug),
		date_modified: course.last_updated,
		aggregate_rating: json_ld::AggregateRating {
			kind: "AggregateRating",
			rating_value: format!("{:.1}", course.rating),
			review_count: course.rating_count,
		},
		educational_level: course.level,
		time_required: time_required(course.duration_hours),
	}
}

/// Builds the canonical URL for a course page.
pub fn course_url(base: &Url, slug: &str) -> Url {
	let mut url = base.clone();
	url.set_path(&format!("/course/{slug}"));
	url
}

/// The fallback `og:image` every course page carries.
fn fallback_og_image(base: &Url) -> Url {
	let mut url = base.clone();
	url.set_path("/og/course-default.png");
	url
}

/// Formats a duration in hours as an ISO-8601 duration string.
///
/// Hours are rounded to the nearest integer, ties away from zero.
fn time_required(duration_hours: f64) -> String {
	#[allow(clippy::cast_possible_truncation)]
	let hours = duration_hours.round() as i64;

	format!("PT{hours}H")
}

#[cfg(test)]
mod tests {
	use color_eyre::Result;
	use url::Url;

	use super::{course_json_ld, course_metadata, not_found_metadata, site_metadata, OgImage};
	use crate::courses::{Course, CourseDirectory};

	fn base() -> Result<Url> {
		Ok(Url::parse("https://example.com")?)
	}

	async fn fixture() -> Course {
		CourseDirectory::with_seed_courses()
			.get("nextjs-seo-mastery")
			.await
			.cloned()
			.expect("seed course exists")
	}

	#[tokio::test]
	async fn fixture_metadata() -> Result<()> {
		let base = base()?;
		let course = fixture().await;
		let parent = site_metadata(&base);
		let metadata = course_metadata(&parent, &base, &course);

		assert_eq!(
			metadata.title,
			"Next.js SEO Mastery: High-Performance Course Detail Pages | Course Platform",
		);
		assert_eq!(
			metadata.canonical.as_ref().map(Url::as_str),
			Some("https://example.com/course/nextjs-seo-mastery"),
		);

		Ok(())
	}

	#[tokio::test]
	async fn fixture_structured_data() -> Result<()> {
		let course = fixture().await;
		let json_ld = course_json_ld(&base()?, &course);

		assert_eq!(json_ld.kind, "Course");
		assert_eq!(json_ld.aggregate_rating.rating_value, "4.8");
		assert_eq!(json_ld.time_required, "PT6H");
		assert_eq!(json_ld.date_modified.to_string(), "2025-11-15");

		Ok(())
	}

	#[tokio::test]
	async fn structured_data_serializes_with_schema_org_keys() -> Result<()> {
		let course = fixture().await;
		let json_ld = course_json_ld(&base()?, &course);
		let value = serde_json::to_value(&json_ld)?;

		assert_eq!(value["@context"], "https://schema.org");
		assert_eq!(value["@type"], "Course");
		assert_eq!(value["provider"]["@type"], "Organization");
		assert_eq!(value["provider"]["sameAs"], "https://example.com/");
		assert_eq!(value["aggregateRating"]["@type"], "AggregateRating");
		assert_eq!(value["aggregateRating"]["ratingValue"], "4.8");
		assert_eq!(value["aggregateRating"]["reviewCount"], 1273);
		assert_eq!(value["educationalLevel"], "Intermediate");
		assert_eq!(value["inLanguage"], "English");
		assert_eq!(value["dateModified"], "2025-11-15");
		assert_eq!(value["timeRequired"], "PT6H");

		Ok(())
	}

	#[tokio::test]
	async fn og_image_composition_is_additive() -> Result<()> {
		let base = base()?;
		let course = fixture().await;

		let mut parent = site_metadata(&base);
		let existing = OgImage {
			url: Url::parse("https://example.com/og/site.png")?,
			width: 800,
			height: 600,
			alt: String::from("Course Platform"),
		};

		if let Some(open_graph) = parent.open_graph.as_mut() {
			open_graph.images.push(existing.clone());
		}

		let metadata = course_metadata(&parent, &base, &course);
		let images = &metadata.open_graph.as_ref().expect("og is set").images;

		assert_eq!(images.len(), 2);
		assert_eq!(images.first(), Some(&existing));

		let fallback = images.last().expect("fallback image appended");
		assert_eq!(fallback.url.as_str(), "https://example.com/og/course-default.png");
		assert_eq!((fallback.width, fallback.height), (1200, 630));
		assert_eq!(fallback.alt, course.name);

		Ok(())
	}

	#[tokio::test]
	async fn derivations_are_idempotent() -> Result<()> {
		let base = base()?;
		let course = fixture().await;
		let parent = site_metadata(&base);

		assert_eq!(
			course_metadata(&parent, &base, &course),
			course_metadata(&parent, &base, &course),
		);

		let first = serde_json::to_string(&course_json_ld(&base, &course))?;
		let second = serde_json::to_string(&course_json_ld(&base, &course))?;
		assert_eq!(first, second);

		Ok(())
	}

	#[test]
	fn not_found_fallback_is_fixed() {
		let metadata = not_found_metadata();

		assert_eq!(metadata.title, "Course not found");
		assert_eq!(
			metadata.description,
			"The course you are looking for could not be found.",
		);
		assert_eq!(metadata.canonical, None);
		assert_eq!(metadata.open_graph, None);
		assert_eq!(metadata.twitter, None);
	}

	#[test]
	fn time_required_rounds_to_nearest_hour() {
		assert_eq!(super::time_required(6.0), "PT6H");
		assert_eq!(super::time_required(5.4), "PT5H");
		assert_eq!(super::time_required(5.5), "PT6H");
		assert_eq!(super::time_required(0.2), "PT0H");
	}
}
