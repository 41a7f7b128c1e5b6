use crate::args::{DatabaseConfig, ScrapeConfig};
use crate::browser::Browser;
use crate::browser::webdriver::WebDriverBrowser;
use crate::controller::navigator::load_page;
use crate::controller::row_builder::build_tee_rows;
use crate::controller::tab_extractor::extract_holes;
use crate::controller::yardage::index_holes;
use crate::error::ScrapeError;
use crate::model::{CourseIdentity, HOLE_COUNT, TeeRow};
use crate::sink::csv::write_csv_file;
use crate::sink::database::Database;
use log::{error, info, warn};

#[derive(Debug, Clone)]
pub struct ScrapedCourse {
    pub title: String,
    /// Holes that made it through extraction with a usable hole number.
    pub holes_found: usize,
    pub rows: Vec<TeeRow>,
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub course: ScrapedCourse,
    /// `None` when the insert failed (the CSV is still written).
    pub rows_inserted: Option<u64>,
}

/// Navigate, click through the holes and shape the tee rows. No sinks.
///
/// # Errors
///
/// Will return `Err` if navigation fails or the page has no hole tabs
pub async fn scrape_course<B: Browser>(
    browser: &B,
    config: &ScrapeConfig,
) -> Result<ScrapedCourse, ScrapeError> {
    let page = load_page(browser, config).await?;
    let records = extract_holes(browser, config).await?;

    info!("--- Data Processing and Structuring ---");
    let holes = index_holes(&records);
    if holes.len() < usize::from(HOLE_COUNT) {
        warn!(
            "Only {} of {HOLE_COUNT} holes were scraped; the rest are stored as not available.",
            holes.len()
        );
    }
    let course = CourseIdentity::new(&page.course_name, &config.url);
    Ok(ScrapedCourse {
        title: page.title,
        holes_found: holes.len(),
        rows: build_tee_rows(&course, &holes),
    })
}

/// Hand the rows to both sinks. A failed insert is logged and doesn't stop
/// the CSV from being written.
///
/// # Errors
///
/// Will return `Err` if the CSV can't be written
pub async fn persist(
    rows: &[TeeRow],
    db: &Database,
    config: &ScrapeConfig,
) -> Result<Option<u64>, ScrapeError> {
    info!("--- Inserting data into {} ---", db.db_type());
    let inserted = match db.insert_tee_rows(rows).await {
        Ok(count) => Some(count),
        Err(e) => {
            error!("Failed to insert data into database: {e}");
            None
        }
    };

    write_csv_file(&config.output_csv, rows)?;
    info!(
        "Data successfully structured and saved to CSV: {}",
        config.output_csv.display()
    );
    Ok(inserted)
}

/// Open the database and make sure the target table exists.
///
/// # Errors
///
/// Will return `Err` if either step fails
pub async fn connect_and_prepare(config: &DatabaseConfig) -> Result<Database, ScrapeError> {
    let db = Database::connect(config).await?;
    if let Err(e) = db.ensure_table().await {
        db.close();
        return Err(e);
    }
    Ok(db)
}

/// Scrape and persist with an open browser and database, then release both
/// whatever happened.
///
/// # Errors
///
/// Will return `Err` if scraping or the CSV write fails
pub async fn run_with<B: Browser>(
    browser: B,
    db: Database,
    config: &ScrapeConfig,
) -> Result<RunOutcome, ScrapeError> {
    let result = scrape_and_persist(&browser, &db, config).await;
    release(browser, db).await;
    result
}

async fn scrape_and_persist<B: Browser>(
    browser: &B,
    db: &Database,
    config: &ScrapeConfig,
) -> Result<RunOutcome, ScrapeError> {
    let course = scrape_course(browser, config).await?;
    let rows_inserted = persist(&course.rows, db, config).await?;
    Ok(RunOutcome {
        course,
        rows_inserted,
    })
}

async fn release<B: Browser>(browser: B, db: Database) {
    match browser.quit().await {
        Ok(()) => info!("WebDriver closed."),
        Err(e) => warn!("Error closing WebDriver: {e}"),
    }
    db.close();
}

/// Prepares the database, then runs against `browser`. The browser is quit
/// even when the database can't be prepared.
///
/// # Errors
///
/// Will return `Err` if the database can't be prepared or the run fails
pub async fn run_with_browser<B: Browser>(
    browser: B,
    config: &ScrapeConfig,
) -> Result<RunOutcome, ScrapeError> {
    let db = match connect_and_prepare(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            if let Err(quit_err) = browser.quit().await {
                warn!("Error closing WebDriver: {quit_err}");
            }
            return Err(e);
        }
    };

    run_with(browser, db, config).await
}

/// A complete run against a real browser session.
///
/// # Errors
///
/// Will return `Err` if the browser can't be launched, the database can't be
/// prepared, or the run itself fails
pub async fn run(config: &ScrapeConfig) -> Result<RunOutcome, ScrapeError> {
    info!("Starting scraper for: {}", config.url);
    let browser = WebDriverBrowser::launch(config).await?;
    run_with_browser(browser, config).await
}
