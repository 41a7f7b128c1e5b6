pub mod args;
pub mod browser;
pub mod error;
pub mod model;
pub mod controller {
    pub mod navigator;
    pub mod row_builder;
    pub mod run;
    pub mod tab_extractor;
    pub mod yardage;
}
pub mod sink {
    pub mod csv;
    pub mod database;
}

pub use args::{DatabaseConfig, DatabaseType, RunEnv, ScrapeConfig, Timing};
pub use error::ScrapeError;
pub use model::{NOT_AVAILABLE, Tee};
