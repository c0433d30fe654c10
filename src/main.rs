use std::error::Error as StdError;

use course_platform::Config;
use tracing::info;

mod logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn StdError>> {
	if let Err(error) = dotenvy::dotenv() {
		eprintln!("Failed to load `.env` file: {error}");
	}

	let config = Config::new()?;

	logging::init();

	info!(?config, "starting course platform");

	course_platform::run(config).await?;

	Ok(())
}
