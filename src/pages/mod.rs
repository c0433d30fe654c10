//! Page rendering.
//!
//! Every route renders a complete HTML document in a single stateless pass: resolve the
//! record, derive its metadata and structured data ([`crate::seo`]), and compose the document
//! ([`layout`]).

use axum::routing::get;
use axum::Router;

use crate::{seo, State};

pub mod layout;
pub mod format;
pub mod markup;

pub mod handlers;

/// Builds the router for the site's pages.
pub fn router(state: &'static State) -> Router {
	Router::new()
		.route("/", get(handlers::home))
		.route("/course/:slug", get(handlers::course))
		.with_state(state)
}

/// Renders the not-found document: fallback metadata, no structured data.
pub(crate) fn not_found_document() -> String {
	layout::document(&seo::not_found_metadata(), None, NOT_FOUND_BODY)
}

/// Body markup for the not-found document.
const NOT_FOUND_BODY: &str = r#"<section aria-labelledby="not-found-heading">
  <div class="container">
    <header class="page-header">
      <h1 id="not-found-heading" class="page-title">Course not found</h1>
      <p class="page-subtitle">The course you are looking for could not be found.</p>
    </header>
    <a class="button button--primary" href="/">Back to the catalog</a>
  </div>
</section>
"#;
