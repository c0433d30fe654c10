//! End-to-end tests driving the router directly, without a TCP listener.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use color_eyre::eyre::ContextCompat;
use color_eyre::Result;
use course_platform::{Config, State};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn app() -> Result<Router> {
	let config = Config {
		addr: "127.0.0.1:0".parse()?,
		public_url: "https://example.com".parse()?,
	};

	Ok(course_platform::router(State::new(config)))
}

async fn get(path: &str) -> Result<(StatusCode, String)> {
	let request = Request::builder().uri(path).body(Body::empty())?;
	let response = app()?.oneshot(request).await?;
	let status = response.status();
	let body = response.into_body().collect().await?.to_bytes();

	Ok((status, String::from_utf8(body.to_vec())?))
}

/// Extracts the payload of the document's single JSON-LD script.
fn json_ld_payload(body: &str) -> Result<&str> {
	let marker = "<script type=\"application/ld+json\">";
	let start = body.find(marker).context("no JSON-LD script in document")? + marker.len();
	let end = body[start..]
		.find("</script>")
		.context("unterminated JSON-LD script")?;

	Ok(&body[start..start + end])
}

#[tokio::test]
async fn home_page_links_to_the_featured_course() -> Result<()> {
	let (status, body) = get("/").await?;

	assert_eq!(status, StatusCode::OK);
	assert!(body.contains("Welcome to Course Platform"));
	assert!(body.contains("/course/nextjs-seo-mastery"));

	Ok(())
}

#[tokio::test]
async fn course_page_renders_the_record() -> Result<()> {
	let (status, body) = get("/course/nextjs-seo-mastery").await?;

	assert_eq!(status, StatusCode::OK);
	assert!(body.contains("Enroll now"));
	assert!(body.contains("$129.00"));
	assert!(body.contains("1,273 reviews"));
	assert!(body.contains("Nov 15, 2025"));

	Ok(())
}

#[tokio::test]
async fn course_page_embeds_exactly_one_json_ld_script() -> Result<()> {
	let (status, body) = get("/course/nextjs-seo-mastery").await?;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body.matches("application/ld+json").count(), 1);

	let payload: serde_json::Value = serde_json::from_str(json_ld_payload(&body)?)?;

	assert_eq!(payload["@type"], "Course");
	assert_eq!(payload["aggregateRating"]["ratingValue"], "4.8");
	assert_eq!(payload["timeRequired"], "PT6H");
	assert_eq!(payload["url"], "https://example.com/course/nextjs-seo-mastery");

	Ok(())
}

#[tokio::test]
async fn unknown_slugs_render_not_found_without_json_ld() -> Result<()> {
	let (status, body) = get("/course/unknown-slug").await?;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert!(body.contains("Course not found"));
	assert!(!body.contains("application/ld+json"));

	Ok(())
}
