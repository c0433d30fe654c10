//! Runtime errors.
//!
//! This module exposes the [`Error`] type that is used across the code base for bubbling up
//! errors. The site has exactly one domain failure mode (a slug that does not resolve to a
//! course), and it is a normal outcome rather than an exceptional one, so the type is small.
//!
//! [`Error`] implements [`IntoResponse`], which means it can be returned from HTTP handlers.
//!
//! This module also exposes a [`Result`] type alias, which sets [`Error`] as the default `E`
//! type parameter.
//!
//! [`Error`]: struct@Error

use std::fmt::{self, Display, Formatter};
use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::pages;

/// Type alias for a [`Result<T, E>`] with its `E` parameter set to [`Error`].
///
/// [`Result`]: std::result::Result
/// [`Error`]: struct@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The site's core error type.
///
/// It carries information about the kind of error that occurred and where it occurred.
/// This type implements [`IntoResponse`], which means it can be returned from HTTP handlers.
#[derive(Debug, Error)]
pub struct Error {
	/// The kind of error that occurred.
	///
	/// This determines the HTTP status code and rendered document for the response.
	kind: ErrorKind,

	/// The source code location of where the error occurred.
	///
	/// This is used for debugging / troubleshooting, and is included in logs.
	location: Location<'static>,
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let Self { kind, location } = self;

		write!(f, "[{location}] {kind}")
	}
}

/// The different kinds of errors that can occur at runtime.
#[derive(Debug, Error)]
enum ErrorKind {
	/// A slug did not resolve to a course.
	#[error("could not find {what}")]
	NotFound {
		/// What we could not find.
		what: &'static str,
	},
}

impl Error {
	/// Creates a new [`Error`] at the caller's source location.
	#[track_caller]
	fn new(kind: ErrorKind) -> Self {
		Self { kind, location: *Location::caller() }
	}

	/// A requested course does not exist.
	///
	/// Produces a `404 Not Found` status and the standard not-found document, with no
	/// structured data.
	#[track_caller]
	pub(crate) fn course_not_found() -> Self {
		Self::new(ErrorKind::NotFound { what: "course" })
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = match self.kind {
			ErrorKind::NotFound { .. } => StatusCode::NOT_FOUND,
		};

		tracing::debug! {
			location = %self.location,
			kind = ?self.kind,
			"returning error from request handler"
		};

		(status, Html(pages::not_found_document())).into_response()
	}
}
