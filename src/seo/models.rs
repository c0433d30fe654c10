//! Types describing a page's SEO metadata.
//!
//! These are rendered into the document `<head>` by [`pages::layout`], never serialized
//! directly.
//!
//! [`pages::layout`]: crate::pages::layout

use url::Url;

/// Metadata for a single rendered page.
///
/// Page-level metadata is derived *from* the site-wide metadata by explicit composition; see
/// [`course_metadata`](crate::seo::course_metadata).
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
	/// The document title.
	pub title: String,

	/// The document description.
	pub description: String,

	/// The canonical URL this page declares for itself, to avoid duplicate-content
	/// ambiguity.
	pub canonical: Option<Url>,

	/// Open Graph fields, consumed by social/link-preview crawlers.
	pub open_graph: Option<OpenGraph>,

	/// Twitter card fields.
	pub twitter: Option<TwitterCard>,
}

/// Open Graph fields for a page.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenGraph {
	/// `og:title`.
	pub title: String,

	/// `og:description`.
	pub description: String,

	/// `og:url`.
	pub url: Url,

	/// `og:type`; `"website"` for the site shell, `"article"` for course pages.
	pub kind: &'static str,

	/// `og:site_name`.
	pub site_name: String,

	/// `og:locale`.
	pub locale: &'static str,

	/// `og:image` descriptors, in order.
	pub images: Vec<OgImage>,
}

/// A single `og:image` descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct OgImage {
	/// The image URL.
	pub url: Url,

	/// The image width, in pixels.
	pub width: u32,

	/// The image height, in pixels.
	pub height: u32,

	/// Alternative text for the image.
	pub alt: String,
}

/// Twitter card fields for a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TwitterCard {
	/// `twitter:card`.
	pub card: &'static str,

	/// `twitter:title`.
	pub title: String,

	/// `twitter:description`.
	pub description: String,
}
