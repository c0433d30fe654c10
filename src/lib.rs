#![doc = include_str!("../README.md")]

use std::fmt::Write;
use std::future::Future;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

mod error;
pub use error::{Error, Result};

mod config;
pub use config::Config;

mod state;
pub use state::State;

pub mod middleware;
pub mod courses;
pub mod seo;
pub mod pages;

/// The routes registered by [`router()`], for logging on startup.
const ROUTES: [(&str, &str); 2] = [("/", "GET"), ("/course/:slug", "GET")];

#[allow(clippy::missing_docs_in_private_items)]
type Server = axum::serve::Serve<Router, Router>;

/// Run the site.
///
/// This function will not exit until a SIGINT signal is received.
/// If you want to supply a custom signal for graceful shutdown, use [`run_until()`] instead.
pub async fn run(config: Config) -> anyhow::Result<()> {
	server(config)
		.await
		.context("build http server")?
		.with_graceful_shutdown(sigint())
		.await
		.context("run http server")
}

/// Run the site until a given future completes.
///
/// This function is the same as [`run()`], except that it also waits for the provided `until`
/// future, and shuts down the server when that future resolves.
pub async fn run_until<Until>(config: Config, until: Until) -> anyhow::Result<()>
where
	Until: Future<Output = ()> + Send + 'static,
{
	server(config)
		.await
		.context("build http server")?
		.with_graceful_shutdown(async move {
			tokio::select! {
				() = until => {}
				() = sigint() => {}
			}
		})
		.await
		.context("run http server")
}

/// Builds the site's route table on top of the given state.
pub fn router(state: &'static State) -> Router {
	Router::new()
		.merge(pages::router(state))
		.layer(middleware::logging::layer!())
}

/// Runs the necessary setup for the site and returns a future that will run the server when
/// polled.
///
/// See [`run()`] and [`run_until()`].
async fn server(config: Config) -> anyhow::Result<Server> {
	tracing::debug!(addr = %config.addr, "establishing TCP connection");

	let tcp_listener = TcpListener::bind(config.addr)
		.await
		.context("bind tcp socket")?;

	let addr = tcp_listener.local_addr().context("get tcp addr")?;
	tracing::info!(%addr, public_url = %config.public_url, "listening for requests");

	let state = State::new(config);
	let mut routes_message = String::from("registering routes:\n");

	for (path, methods) in ROUTES {
		writeln!(&mut routes_message, "    • {path} => [{methods}]")?;
	}

	tracing::info!("{routes_message}");

	Ok(axum::serve(tcp_listener, router(state)))
}

/// Waits for a SIGINT signal from the operating system.
async fn sigint() {
	let signal_result = signal::ctrl_c().await;

	if let Err(err) = signal_result {
		tracing::error!("failed to receive SIGINT: {err}");
	} else {
		tracing::warn!("received SIGINT; shutting down...");
	}
}
