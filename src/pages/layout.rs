//! The HTML document shell shared by every page.

use chrono::{Datelike, Utc};

use super::markup::escape;
use crate::seo::{CourseJsonLd, PageMetadata};

/// Renders a complete HTML document.
///
/// `metadata` becomes the document head; `json_ld`, when present, is serialized verbatim
/// into an `application/ld+json` script; `body` is the page's markup, placed inside the site
/// shell (header, `<main>`, footer).
pub fn document(metadata: &PageMetadata, json_ld: Option<&CourseJsonLd>, body: &str) -> String {
	let head = head(metadata, json_ld);
	let year = Utc::now().year();

	format!(
		r#"<!DOCTYPE html>
<html lang="en">
<head>
{head}</head>
<body>
<div class="app-shell">
  <header class="app-header">
    <div class="app-header__inner">
      <a href="/" class="app-header__brand">
        <span class="app-header__logo-circle" aria-hidden="true"></span>
        <span class="app-header__brand-text">Course Platform</span>
      </a>
    </div>
  </header>
  <main class="app-main" role="main">
{body}  </main>
  <footer class="app-footer">
    <div class="app-footer__inner">
      <p>&copy; {year} Course Platform. All rights reserved.</p>
    </div>
  </footer>
</div>
</body>
</html>
"#,
	)
}

/// Renders the document head from the page's metadata.
fn head(metadata: &PageMetadata, json_ld: Option<&CourseJsonLd>) -> String {
	let mut head = String::new();

	head.push_str("<meta charset=\"utf-8\">\n");
	head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
	head.push_str(&format!("<title>{}</title>\n", escape(&metadata.title)));
	meta_name(&mut head, "description", &metadata.description);

	if let Some(canonical) = &metadata.canonical {
		head.push_str(&format!(
			"<link rel=\"canonical\" href=\"{}\">\n",
			escape(canonical.as_str()),
		));
	}

	if let Some(og) = &metadata.open_graph {
		meta_property(&mut head, "og:title", &og.title);
		meta_property(&mut head, "og:description", &og.description);
		meta_property(&mut head, "og:url", og.url.as_str());
		meta_property(&mut head, "og:type", og.kind);
		meta_property(&mut head, "og:site_name", &og.site_name);
		meta_property(&mut head, "og:locale", og.locale);

		for image in &og.images {
			meta_property(&mut head, "og:image", image.url.as_str());
			meta_property(&mut head, "og:image:width", &image.width.to_string());
			meta_property(&mut head, "og:image:height", &image.height.to_string());
			meta_property(&mut head, "og:image:alt", &image.alt);
		}
	}

	if let Some(twitter) = &metadata.twitter {
		meta_name(&mut head, "twitter:card", twitter.card);
		meta_name(&mut head, "twitter:title", &twitter.title);
		meta_name(&mut head, "twitter:description", &twitter.description);
	}

	if let Some(json_ld) = json_ld {
		match serde_json::to_string(json_ld) {
			Ok(payload) => {
				head.push_str(&format!(
					"<script type=\"application/ld+json\">{payload}</script>\n",
				));
			}
			Err(error) => {
				tracing::error!(%error, "failed to serialize structured data");
			}
		}
	}

	head
}

/// Appends a `<meta name="..">` tag.
fn meta_name(head: &mut String, name: &str, content: &str) {
	head.push_str(&format!(
		"<meta name=\"{name}\" content=\"{}\">\n",
		escape(content),
	));
}

/// Appends a `<meta property="..">` tag (the Open Graph convention).
fn meta_property(head: &mut String, property: &str, content: &str) {
	head.push_str(&format!(
		"<meta property=\"{property}\" content=\"{}\">\n",
		escape(content),
	));
}

#[cfg(test)]
mod tests {
	use color_eyre::Result;
	use url::Url;

	use super::document;
	use crate::courses::CourseDirectory;
	use crate::seo;

	#[tokio::test]
	async fn course_document_embeds_metadata_and_structured_data() -> Result<()> {
		let base = Url::parse("https://example.com")?;
		let directory = CourseDirectory::with_seed_courses();
		let course = directory
			.get("nextjs-seo-mastery")
			.await
			.expect("seed course exists");

		let parent = seo::site_metadata(&base);
		let metadata = seo::course_metadata(&parent, &base, course);
		let json_ld = seo::course_json_ld(&base, course);
		let html = document(&metadata, Some(&json_ld), "<p>body</p>");

		assert!(html.contains(
			"<link rel=\"canonical\" href=\"https://example.com/course/nextjs-seo-mastery\">"
		));
		assert!(html.contains("<meta property=\"og:type\" content=\"article\">"));
		assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
		assert_eq!(html.matches("application/ld+json").count(), 1);

		Ok(())
	}

	#[test]
	fn not_found_document_has_no_structured_data() {
		let html = document(&seo::not_found_metadata(), None, "<p>body</p>");

		assert!(html.contains("<title>Course not found</title>"));
		assert!(!html.contains("application/ld+json"));
		assert!(!html.contains("og:title"));
	}
}
