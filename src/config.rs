//! Module containing the [`Config`] struct, the site's configuration.

use std::env;
use std::error::Error as StdError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use anyhow::Context;
use url::Url;

/// The public URL assumed when `COURSE_PLATFORM_PUBLIC_URL` is not set.
const DEFAULT_PUBLIC_URL: &str = "https://example.com";

/// Configuration values for the site.
///
/// These are read from the environment on startup. Every value has a default, so the server
/// runs without any environment at all.
#[derive(Debug, Clone)]
pub struct Config {
	/// The ip address and port the server is going to listen on.
	pub addr: SocketAddr,

	/// The public URL of the site.
	///
	/// Canonical URLs and Open Graph tags are derived from this, so it should be the URL
	/// users reach the site under, not the bind address.
	pub public_url: Url,
}

impl Config {
	/// Creates a new [`Config`] object by reading from the environment.
	pub fn new() -> anyhow::Result<Self> {
		let ip_addr = parse_from_env_opt("COURSE_PLATFORM_IP")?
			.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));

		let port = parse_from_env_opt("COURSE_PLATFORM_PORT")?.unwrap_or(3000);
		let addr = SocketAddr::new(ip_addr, port);

		let public_url = match parse_from_env_opt("COURSE_PLATFORM_PUBLIC_URL")? {
			Some(url) => url,
			None => Url::parse(DEFAULT_PUBLIC_URL).context("parse default public url")?,
		};

		Ok(Self { addr, public_url })
	}
}

/// Parses an environment variable into an `Option<T>`, returning `None` if the variable is not
/// set or empty.
fn parse_from_env_opt<T>(var: &str) -> anyhow::Result<Option<T>>
where
	T: FromStr,
	T::Err: StdError + Send + Sync + 'static,
{
	let Some(value) = env::var(var).ok() else {
		return Ok(None);
	};

	if value.is_empty() {
		return Ok(None);
	}

	<T as FromStr>::from_str(&value)
		.map(Some)
		.with_context(|| format!("failed to parse `{var}`"))
}
