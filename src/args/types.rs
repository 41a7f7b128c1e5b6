use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://lakejovita.com/south-course/";
pub const DEFAULT_OUTPUT_CSV: &str = "data/lake_jovita_south_course_data.csv";

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape per-tee scorecard data for one golf course", long_about = None)]
pub struct Args {
    /// Database type: postgres or sqlite
    #[arg(
        short = 'd',
        long,
        value_enum,
        value_name = "DATABASE_TYPE",
        env = "DB_TYPE",
        default_value = "postgres"
    )]
    pub db_type: DatabaseType,
    // Only necessary for postgres.
    #[arg(long, value_name = "DATABASE_HOST", env = "DB_HOST")]
    pub db_host: Option<String>,
    #[arg(
        short = 'p',
        long,
        value_name = "DATABASE_PORT",
        env = "DB_PORT",
        default_value = "5432"
    )]
    pub db_port: u16,
    #[arg(short = 'u', long, value_name = "DATABASE_USER", env = "DB_USER")]
    pub db_user: Option<String>,
    /// Either the password itself or a secrets file such as /run/secrets/db_password
    #[arg(
        short = 'w',
        long,
        value_name = "DATABASE_PASSWORD",
        env = "DB_PASSWORD",
        hide_env_values = true
    )]
    pub db_password: Option<String>,
    /// For postgres, the name of the database. For sqlite, the filename (or :memory:).
    #[arg(short = 'n', long, value_name = "DATABASE_NAME", env = "DB_NAME")]
    pub db_name: String,

    /// Execution profile; cloud runs headless with the Linux chrome binary
    #[arg(long, value_enum, env = "RUN_ENV", default_value = "local")]
    pub run_env: RunEnv,
    #[arg(long, env = "SCRAPE_URL", default_value = DEFAULT_URL)]
    pub url: String,
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:9515")]
    pub webdriver_url: String,
    /// Only used by the cloud profile
    #[arg(long, env = "CHROME_BINARY", default_value = "/usr/bin/google-chrome")]
    pub chrome_binary: String,
    #[arg(long, env = "OUTPUT_CSV", default_value = DEFAULT_OUTPUT_CSV)]
    pub output_csv: PathBuf,
    /// Seconds to wait for a hole's panel to become visible
    #[arg(long, default_value_t = 10)]
    pub visibility_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatabaseType {
    Postgres,
    Sqlite,
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DatabaseType::Postgres => "postgres",
            DatabaseType::Sqlite => "sqlite",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunEnv {
    Cloud,
    Local,
}

impl fmt::Display for RunEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunEnv::Cloud => "cloud",
            RunEnv::Local => "local",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub db_type: DatabaseType,
    pub host: Option<String>,
    pub port: u16,
    pub name: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Fixed waits around page interactions.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    /// Pause after the initial navigation so the static render settles.
    pub page_settle: Duration,
    /// Pause after each tab click before looking for its panel.
    pub click_settle: Duration,
    pub visibility_timeout: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            page_settle: Duration::from_secs(2),
            click_settle: Duration::from_millis(500),
            visibility_timeout: Duration::from_secs(10),
        }
    }
}

/// Everything a run needs, built once at startup.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url: String,
    pub run_env: RunEnv,
    pub webdriver_url: String,
    pub chrome_binary: String,
    pub database: DatabaseConfig,
    pub output_csv: PathBuf,
    pub timing: Timing,
}
