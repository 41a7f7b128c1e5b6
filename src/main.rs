use chrono::Local;
use log::{error, info};
use rusty_golf_course_scraper::args;
use rusty_golf_course_scraper::controller::run::run;
use std::error::Error;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match args::args_checks() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            return;
        }
    };

    let started = Local::now();
    info!("Run started at {}", started.format("%Y-%m-%d %H:%M:%S"));

    match run(&config).await {
        Ok(outcome) => {
            let inserted = outcome
                .rows_inserted
                .map_or_else(|| "no".to_string(), |n| n.to_string());
            info!(
                "Scraped {} holes from '{}'; {} tee rows, {inserted} inserted.",
                outcome.course.holes_found,
                outcome.course.title,
                outcome.course.rows.len()
            );
        }
        Err(e) => {
            let mut message = format!("An unexpected error occurred during the main scraping process: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                message.push_str(&format!("\n  caused by: {cause}"));
                source = cause.source();
            }
            error!("{message}");
        }
    }

    let elapsed = Local::now() - started;
    info!("Run finished in {}s", elapsed.num_seconds());
}
