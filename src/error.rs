use crate::browser::BrowserError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),
    #[error("no hole tab links found on {0}")]
    NoHoleTabs(String),
    #[error("selector error: {0}")]
    Selector(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("postgres error: {0}")]
    Postgres(#[from] deadpool_postgres::tokio_postgres::Error),
    #[error("postgres pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),
    #[error("postgres pool setup error: {0}")]
    CreatePool(#[from] deadpool_postgres::CreatePoolError),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("db error: {0}")]
    Db(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<String> for ScrapeError {
    fn from(err: String) -> Self {
        Self::Config(err)
    }
}
