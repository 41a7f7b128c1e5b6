mod types;
mod validation;

pub use types::{
    Args, DEFAULT_OUTPUT_CSV, DEFAULT_URL, DatabaseConfig, DatabaseType, RunEnv, ScrapeConfig,
    Timing,
};
pub use validation::resolve_secret;

use clap::Parser;

/// Loads `.env` (if present), parses the command line with environment
/// fallbacks and validates the result into a [`ScrapeConfig`].
///
/// # Errors
///
/// Will return `Err` if the arguments don't describe a usable configuration
pub fn args_checks() -> Result<ScrapeConfig, String> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(format!("could not load .env: {e}"));
        }
    }
    Args::parse().validate()
}
