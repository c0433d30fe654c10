//! The in-memory course directory.
//!
//! This is a stand-in for a real backing store. Lookups go through an asynchronous interface
//! so that swapping in a database or a remote catalog service later does not change any call
//! sites.

use std::collections::HashMap;

use chrono::NaiveDate;
use url::Url;

use super::{Course, CourseProvider, Currency, Level};

/// A fixed mapping from slug to [`Course`].
///
/// Built once at startup and never mutated. Every key equals its record's `slug` field.
#[derive(Debug, Default)]
pub struct CourseDirectory {
	/// The courses, keyed by slug.
	courses: HashMap<String, Course>,
}

impl CourseDirectory {
	/// Creates a directory from the given courses, keyed by their slugs.
	pub fn new<I>(courses: I) -> Self
	where
		I: IntoIterator<Item = Course>,
	{
		let courses = courses
			.into_iter()
			.map(|course| (course.slug.clone(), course))
			.collect();

		Self { courses }
	}

	/// Creates the directory used by the live site.
	pub fn with_seed_courses() -> Self {
		Self::new([nextjs_seo_mastery()])
	}

	/// Resolves `slug` to a course.
	///
	/// The lookup is an exact, case-sensitive match. Absence is a normal outcome, not an
	/// error.
	pub async fn get(&self, slug: &str) -> Option<&Course> {
		self.courses.get(slug)
	}
}

/// The one course the site currently ships with.
fn nextjs_seo_mastery() -> Course {
	Course {
		slug: String::from("nextjs-seo-mastery"),
		name: String::from("Next.js SEO Mastery: High-Performance Course Detail Pages"),
		description: String::from(
			"Learn how to build high-performance, SEO-optimized course detail pages with \
			 Next.js, including SSR, dynamic metadata, and structured data that search \
			 engines love.",
		),
		provider: CourseProvider {
			name: String::from("Course Platform"),
			url: Url::parse("https://example.com").expect("hardcoded URL is valid"),
		},
		level: Level::Intermediate,
		duration_hours: 6.0,
		lessons_count: 38,
		rating: 4.8,
		rating_count: 1273,
		price: 129.0,
		currency: Currency::Usd,
		language: String::from("English"),
		last_updated: NaiveDate::from_ymd_opt(2025, 11, 15).expect("hardcoded date is valid"),
	}
}

#[cfg(test)]
mod tests {
	use super::CourseDirectory;

	#[tokio::test]
	async fn every_key_matches_its_records_slug() {
		let directory = CourseDirectory::with_seed_courses();

		for (key, course) in &directory.courses {
			assert_eq!(key, &course.slug);
		}
	}

	#[tokio::test]
	async fn resolves_seeded_slugs() {
		let directory = CourseDirectory::with_seed_courses();
		let course = directory.get("nextjs-seo-mastery").await;

		assert!(course.is_some_and(|course| course.slug == "nextjs-seo-mastery"));
	}

	#[tokio::test]
	async fn lookups_are_exact_and_case_sensitive() {
		let directory = CourseDirectory::with_seed_courses();

		assert!(directory.get("unknown-slug").await.is_none());
		assert!(directory.get("Nextjs-Seo-Mastery").await.is_none());
		assert!(directory.get("nextjs-seo-mastery/").await.is_none());
	}
}
