use crate::args::ScrapeConfig;
use crate::browser::{Browser, Locator};
use crate::error::ScrapeError;
use crate::model::NOT_AVAILABLE;
use log::{info, warn};

pub const COURSE_NAME_SELECTOR: &str = "div.fusion-text.fusion-text-1 p";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub course_name: String,
}

/// Open the course page, give it time to render and read the title and
/// course name. Neither missing title nor missing course name stops the run.
///
/// # Errors
///
/// Will return `Err` if the browser can't navigate to the page
pub async fn load_page<B: Browser>(
    browser: &B,
    config: &ScrapeConfig,
) -> Result<PageSummary, ScrapeError> {
    info!("Navigating to {}...", config.url);
    browser.goto(&config.url).await?;
    tokio::time::sleep(config.timing.page_settle).await;

    let title = match browser.title().await {
        Ok(title) => title,
        Err(e) => {
            warn!("Could not read page title: {e}");
            NOT_AVAILABLE.to_string()
        }
    };
    info!("Page title: {title}");

    let course_name = match browser.find_text(Locator::Css(COURSE_NAME_SELECTOR)).await {
        Ok(raw) => {
            let name = clean_course_name(&raw);
            info!("Extracted Course Name: {name}");
            name
        }
        Err(e) => {
            warn!("Could not extract Course Name: {e}");
            NOT_AVAILABLE.to_string()
        }
    };

    Ok(PageSummary { title, course_name })
}

/// `"LAKE JOVITA SOUTH COURSE."` -> `"Lake Jovita South Course"`.
#[must_use]
pub fn clean_course_name(raw: &str) -> String {
    let stripped = raw.trim().replace('.', "");
    let mut out = String::with_capacity(stripped.len());
    let mut prev_is_letter = false;
    for ch in stripped.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    if out.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        out
    }
}
