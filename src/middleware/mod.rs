//! This module contains general purpose middleware.
//!
//! Middlewares are implemented as [tower services].
//! This means they can integrate with [`axum`], our HTTP framework, but are also re-usable
//! independently of that.
//!
//! [tower services]: tower_http::trace::Trace

pub(crate) mod logging;
