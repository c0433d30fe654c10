//! Logging setup for the server binary.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`; everything at `info` and above is logged by default.
pub fn init() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt()
		.compact()
		.with_ansi(true)
		.with_target(true)
		.with_env_filter(filter)
		.init();
}
