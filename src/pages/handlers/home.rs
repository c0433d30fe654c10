//! Handler for `GET /`.

use axum::extract::State;
use axum::response::Html;

use crate::pages::layout;
use crate::seo;

/// Renders the marketing home page.
#[tracing::instrument(skip(state))]
pub async fn home(State(state): State<&'static crate::State>) -> Html<String> {
	let metadata = seo::site_metadata(&state.config.public_url);

	Html(layout::document(&metadata, None, HOME_BODY))
}

/// Body markup for the home page. Static marketing copy, not data-driven.
const HOME_BODY: &str = r#"<section aria-labelledby="home-heading">
  <div class="container">
    <header class="page-header">
      <h1 id="home-heading" class="page-title">Welcome to Course Platform</h1>
      <p class="page-subtitle">
        Explore our curated catalog of high-quality courses, taught by leading experts.
      </p>
    </header>
    <section aria-labelledby="featured-course-heading" class="card">
      <div class="card__body">
        <h2 id="featured-course-heading" class="card__title">Featured course</h2>
        <p class="card__text">
          Check out our detailed course page example, including SEO optimization and
          structured data.
        </p>
        <a class="button button--primary" href="/course/nextjs-seo-mastery">
          View course detail example
        </a>
      </div>
    </section>
  </div>
</section>
"#;
