use crate::args::{ScrapeConfig, Timing};
use crate::browser::{Browser, BrowserError, Locator};
use crate::error::ScrapeError;
use crate::model::{HoleRecord, NOT_AVAILABLE, UNKNOWN_LABEL};
use log::{error, info, warn};
use scraper::{ElementRef, Html, Selector};

pub const HOLE_TAB_XPATH: &str = "//div[@class='nav']/ul[@class='nav-tabs']//li/a[contains(@class, 'tab-link') and .//h4[contains(text(), 'Hole')]]";
pub const PAR_HEADING_SELECTOR: &str = "h3.fusion-responsive-typography-calculated";

const PAR_DASH: char = '–';

/// Par and yardage text pulled out of one hole's panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelFields {
    pub par: Option<String>,
    pub raw_yardage_line: Option<String>,
}

/// Click through every hole tab and collect what each panel shows.
///
/// The tab handles are located once, up front, and reused for every click.
/// If the page re-renders the tab strip those handles can go stale and the
/// affected holes will fail individually (and be skipped).
///
/// # Errors
///
/// Will return `Err` if the tabs can't be looked up or there are none
pub async fn extract_holes<B: Browser>(
    browser: &B,
    config: &ScrapeConfig,
) -> Result<Vec<HoleRecord>, ScrapeError> {
    let tabs = browser.find_all(Locator::XPath(HOLE_TAB_XPATH)).await?;
    if tabs.is_empty() {
        error!("Could not find any hole tab links on {}.", config.url);
        return Err(ScrapeError::NoHoleTabs(config.url.clone()));
    }
    info!("Found {} potential hole tab links.", tabs.len());

    let mut records = Vec::with_capacity(tabs.len());
    for tab in &tabs {
        let label = match browser.child_text(tab, "h4").await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => UNKNOWN_LABEL.to_string(),
            Err(e) => {
                error!("Could not read hole tab heading: {e}");
                continue;
            }
        };
        info!("Processing {label}...");

        match extract_hole(browser, tab, &label, &config.timing).await {
            Ok(record) => records.push(record),
            Err(e) => {
                let location = browser
                    .current_url()
                    .await
                    .unwrap_or_else(|_| NOT_AVAILABLE.to_string());
                warn!("Error processing {label} tab: {e} (current URL: {location})");
            }
        }
    }
    Ok(records)
}

async fn extract_hole<B: Browser>(
    browser: &B,
    tab: &B::Element,
    label: &str,
    timing: &Timing,
) -> Result<HoleRecord, ScrapeError> {
    browser.click(tab).await?;
    tokio::time::sleep(timing.click_settle).await;

    let href = browser
        .attribute(tab, "href")
        .await?
        .ok_or_else(|| BrowserError::NotFound(format!("href on the {label} tab")))?;
    let panel_id = panel_id_from_href(&href);
    if panel_id.is_empty() {
        return Err(BrowserError::NotFound(format!("panel id in href '{href}'")).into());
    }

    browser
        .wait_visible(panel_id, timing.visibility_timeout)
        .await?;
    let html = browser.outer_html(panel_id).await?;
    let fields = parse_hole_panel(&html)?;

    match &fields.par {
        Some(par) => info!("  Par: {par}"),
        None => warn!("  Par heading not found for {label}."),
    }
    match &fields.raw_yardage_line {
        Some(line) => info!("  Yardages: {line}"),
        None => warn!("  Yardage paragraph not found for {label}."),
    }

    Ok(HoleRecord::new(label, fields.par, fields.raw_yardage_line))
}

/// `"https://x/south-course/#hole-3"` -> `"hole-3"`.
#[must_use]
pub fn panel_id_from_href(href: &str) -> &str {
    href.rsplit('#').next().unwrap_or(href)
}

/// Pull par and the raw yardage line out of a hole panel's markup.
///
/// Par comes from a heading like `Par 4 – 412 Yards`; the yardage line is the
/// first paragraph mentioning both `Gold:` and `Blue:`.
///
/// # Errors
///
/// Will return `Err` if one of the built-in selectors doesn't parse
pub fn parse_hole_panel(html: &str) -> Result<PanelFields, ScrapeError> {
    let fragment = Html::parse_fragment(html);
    let heading_selector = Selector::parse(PAR_HEADING_SELECTOR)
        .map_err(|err| ScrapeError::Selector(err.to_string()))?;
    let paragraph_selector =
        Selector::parse("p").map_err(|err| ScrapeError::Selector(err.to_string()))?;

    let par = fragment
        .select(&heading_selector)
        .next()
        .map(stripped_text)
        .filter(|text| text.contains("Par"))
        .map(|text| par_from_heading(&text));

    let raw_yardage_line = fragment
        .select(&paragraph_selector)
        .map(stripped_text)
        .find(|text| text.contains("Gold:") && text.contains("Blue:"));

    Ok(PanelFields {
        par,
        raw_yardage_line,
    })
}

fn par_from_heading(text: &str) -> String {
    text.split(PAR_DASH)
        .next()
        .unwrap_or(text)
        .trim()
        .replace("Par ", "")
}

/// Text nodes trimmed and concatenated, empty ones dropped.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
