//! Handler for `GET /course/:slug`.

use axum::extract::{Path, State};
use axum::response::Html;

use crate::courses::Course;
use crate::pages::markup::escape;
use crate::pages::{format, layout};
use crate::{seo, Error, Result};

/// Renders a course detail page.
///
/// Unknown slugs produce the standard not-found document; no structured data is computed or
/// emitted for them.
#[tracing::instrument(skip(state))]
pub async fn course(
	State(state): State<&'static crate::State>,
	Path(slug): Path<String>,
) -> Result<Html<String>> {
	let course = state
		.courses
		.get(&slug)
		.await
		.ok_or_else(Error::course_not_found)?;

	let base = &state.config.public_url;
	let parent = seo::site_metadata(base);
	let metadata = seo::course_metadata(&parent, base, course);
	let json_ld = seo::course_json_ld(base, course);

	Ok(Html(layout::document(&metadata, Some(&json_ld), &body(course))))
}

/// Renders the page body: header, overview, and sidebar inside a schema.org `Course` scope.
fn body(course: &Course) -> String {
	format!(
		r#"<article aria-labelledby="course-title" class="container" itemscope itemtype="https://schema.org/Course">
{header}<div class="course-layout">
{overview}{sidebar}</div>
</article>
"#,
		header = header(course),
		overview = OVERVIEW_BODY,
		sidebar = sidebar(course),
	)
}

/// Renders the header block: level/language pill, name, description, and the metrics row.
fn header(course: &Course) -> String {
	let rating = format!("{:.1}", course.rating);

	format!(
		r#"<header class="page-header">
  <p class="pill" aria-label="Course level: {level}">{level} &middot; {language}</p>
  <h1 id="course-title" class="page-title" itemprop="name">{name}</h1>
  <p class="page-subtitle" itemprop="description">{description}</p>
  <div class="course-meta" aria-label="Course quick stats">
    <div class="course-meta__item">
      <span class="course-meta__label">Provider</span>
      <span itemprop="provider" itemscope itemtype="https://schema.org/Organization">
        <span itemprop="name">{provider}</span>
      </span>
    </div>
    <div class="course-meta__item">
      <span class="course-meta__label">Duration</span>
      <span>{duration} hours</span>
    </div>
    <div class="course-meta__item">
      <span class="course-meta__label">Lessons</span>
      <span>{lessons}</span>
    </div>
    <div class="course-meta__item" aria-label="{rating} out of 5 stars">
      <span class="course-meta__label">Rating</span>
      <span>{rating} / 5 &middot; {reviews} reviews</span>
    </div>
    <div class="course-meta__item">
      <span class="course-meta__label">Last updated</span>
      <time datetime="{date_iso}">{date}</time>
    </div>
  </div>
</header>
"#,
		level = course.level,
		language = escape(&course.language),
		name = escape(&course.name),
		description = escape(&course.description),
		provider = escape(&course.provider.name),
		duration = course.duration_hours,
		lessons = course.lessons_count,
		rating = rating,
		reviews = format::thousands(course.rating_count),
		date_iso = course.last_updated,
		date = format::medium_date(course.last_updated),
	)
}

/// Renders the sidebar block: price, static bullet points, and the enroll call-to-action.
fn sidebar(course: &Course) -> String {
	format!(
		r#"<aside class="course-sidebar" aria-label="Course purchase information">
  <section class="course-sidebar__card">
    <p class="course-sidebar__price">{price}</p>
    <p class="course-sidebar__price-note">
      One-time payment &middot; Lifetime access &middot; 30-day satisfaction guarantee
    </p>
    <button type="button" class="button button--primary" aria-label="Enroll now">Enroll now</button>
    <ul class="course-sidebar__meta">
      <li>Instant access to all lessons</li>
      <li>Downloadable code examples</li>
      <li>Hands-on performance audits</li>
    </ul>
  </section>
</aside>
"#,
		price = format::price(course.price, course.currency),
	)
}

/// The overview block. Fixed copy, not data-driven.
const OVERVIEW_BODY: &str = r#"<section aria-label="Course overview" class="course-main">
  <section class="course-section" aria-labelledby="overview-heading">
    <h2 id="overview-heading" class="course-section__title">What you&#39;ll build</h2>
    <p class="course-section__body">
      In this course, you&#39;ll learn how to create high-performance, SEO-friendly course
      detail pages using Next.js App Router. You&#39;ll implement server-side rendering,
      dynamic metadata, and JSON-LD structured data, and you&#39;ll learn how to measure and
      optimize Core Web Vitals in Lighthouse.
    </p>
  </section>
  <section class="course-section" aria-labelledby="outcomes-heading">
    <h2 id="outcomes-heading" class="course-section__title">Key outcomes</h2>
    <div class="course-stats">
      <div class="course-stats__item">
        <span class="course-stats__label">Rendering</span>
        <span class="course-stats__value">SSR + optimized payloads</span>
      </div>
      <div class="course-stats__item">
        <span class="course-stats__label">SEO</span>
        <span class="course-stats__value">Dynamic meta &amp; rich snippets</span>
      </div>
      <div class="course-stats__item">
        <span class="course-stats__label">Performance</span>
        <span class="course-stats__value">Green Core Web Vitals</span>
      </div>
    </div>
  </section>
</section>
"#;
