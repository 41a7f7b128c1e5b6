#![allow(dead_code)]

use async_trait::async_trait;
use rusty_golf_course_scraper::browser::{Browser, BrowserError, Locator};
use rusty_golf_course_scraper::controller::navigator::COURSE_NAME_SELECTOR;
use rusty_golf_course_scraper::controller::tab_extractor::HOLE_TAB_XPATH;
use rusty_golf_course_scraper::{
    DatabaseConfig, DatabaseType, RunEnv, ScrapeConfig, Timing,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PAGE_URL: &str = "https://lakejovita.com/south-course/";

pub struct FakeTab {
    pub label: Option<String>,
    pub href: Option<String>,
    /// Reading the heading fails like a detached DOM node.
    pub stale: bool,
}

pub struct FakePanel {
    pub html: String,
    pub visible: bool,
}

/// What the scraper did to the fake, shared so tests can inspect it after
/// the browser has been moved into (and quit by) the run.
#[derive(Debug, Default)]
pub struct FakeLog {
    pub visited: Vec<String>,
    pub clicks: Vec<usize>,
    pub waits: Vec<(String, Duration)>,
    pub quit: bool,
}

/// In-memory stand-in for a rendered course page. Elements are tab indexes.
pub struct FakeBrowser {
    pub title: String,
    pub course_name: Option<String>,
    pub tabs: Vec<FakeTab>,
    pub panels: HashMap<String, FakePanel>,
    pub log: Arc<Mutex<FakeLog>>,
}

impl FakeBrowser {
    pub fn empty() -> Self {
        Self {
            title: "South Course | Lake Jovita".to_string(),
            course_name: Some("LAKE JOVITA SOUTH COURSE.".to_string()),
            tabs: Vec::new(),
            panels: HashMap::new(),
            log: Arc::new(Mutex::new(FakeLog::default())),
        }
    }

    /// 18 hole tabs, every panel visible, built from `hole -> (par, yardage line)`.
    pub fn with_holes<F>(hole: F) -> Self
    where
        F: Fn(u8) -> (Option<String>, Option<String>),
    {
        let mut browser = Self::empty();
        for n in 1..=18u8 {
            let (par, line) = hole(n);
            browser.add_hole(n, par.as_deref(), line.as_deref());
        }
        browser
    }

    pub fn add_hole(&mut self, n: u8, par: Option<&str>, yardage_line: Option<&str>) {
        let id = format!("tab-hole-{n}");
        self.tabs.push(FakeTab {
            label: Some(format!("Hole {n}")),
            href: Some(format!("{PAGE_URL}#{id}")),
            stale: false,
        });
        self.panels.insert(
            id.clone(),
            FakePanel {
                html: hole_panel_html(&id, par, yardage_line),
                visible: true,
            },
        );
    }

    pub fn log(&self) -> Arc<Mutex<FakeLog>> {
        Arc::clone(&self.log)
    }

    fn tab(&self, idx: usize) -> Result<&FakeTab, BrowserError> {
        self.tabs
            .get(idx)
            .ok_or_else(|| BrowserError::NotFound(format!("tab {idx}")))
    }
}

pub fn hole_panel_html(id: &str, par: Option<&str>, yardage_line: Option<&str>) -> String {
    let heading = par
        .map(|p| {
            format!(
                r#"<h3 class="fusion-title-heading fusion-responsive-typography-calculated">Par {p} – Signature hole</h3>"#
            )
        })
        .unwrap_or_default();
    let yardages = yardage_line
        .map(|line| format!("<p>{line}</p>"))
        .unwrap_or_default();
    format!(
        r#"<div id="{id}" class="tab-pane fade"><div class="fusion-text">{heading}<p>Play it safe off the tee.</p>{yardages}</div></div>"#
    )
}

#[async_trait]
impl Browser for FakeBrowser {
    type Element = usize;

    async fn goto(&self, url: &str) -> Result<(), BrowserError> {
        self.log.lock().unwrap().visited.push(url.to_string());
        Ok(())
    }

    async fn title(&self) -> Result<String, BrowserError> {
        Ok(self.title.clone())
    }

    async fn current_url(&self) -> Result<String, BrowserError> {
        Ok(self
            .log
            .lock()
            .unwrap()
            .visited
            .last()
            .cloned()
            .unwrap_or_default())
    }

    async fn find_text(&self, locator: Locator<'_>) -> Result<String, BrowserError> {
        match (locator, &self.course_name) {
            (Locator::Css(COURSE_NAME_SELECTOR), Some(name)) => Ok(name.clone()),
            _ => Err(BrowserError::NotFound(format!("{locator:?}"))),
        }
    }

    async fn find_all(&self, locator: Locator<'_>) -> Result<Vec<usize>, BrowserError> {
        match locator {
            Locator::XPath(HOLE_TAB_XPATH) => Ok((0..self.tabs.len()).collect()),
            _ => Ok(Vec::new()),
        }
    }

    async fn child_text(&self, element: &usize, tag: &str) -> Result<Option<String>, BrowserError> {
        let tab = self.tab(*element)?;
        if tab.stale {
            return Err(BrowserError::Driver("stale element reference".to_string()));
        }
        Ok(if tag == "h4" { tab.label.clone() } else { None })
    }

    async fn attribute(&self, element: &usize, name: &str) -> Result<Option<String>, BrowserError> {
        let tab = self.tab(*element)?;
        Ok(if name == "href" { tab.href.clone() } else { None })
    }

    async fn click(&self, element: &usize) -> Result<(), BrowserError> {
        self.tab(*element)?;
        self.log.lock().unwrap().clicks.push(*element);
        Ok(())
    }

    async fn wait_visible(&self, id: &str, timeout: Duration) -> Result<(), BrowserError> {
        self.log.lock().unwrap().waits.push((id.to_string(), timeout));
        match self.panels.get(id) {
            Some(panel) if panel.visible => Ok(()),
            _ => Err(BrowserError::Timeout {
                id: id.to_string(),
                timeout,
            }),
        }
    }

    async fn outer_html(&self, id: &str) -> Result<String, BrowserError> {
        self.panels
            .get(id)
            .map(|panel| panel.html.clone())
            .ok_or_else(|| BrowserError::NotFound(format!("#{id}")))
    }

    async fn quit(self) -> Result<(), BrowserError> {
        self.log.lock().unwrap().quit = true;
        Ok(())
    }
}

/// SQLite file and CSV both inside `dir`; no settle delays.
pub fn test_config(dir: &Path) -> ScrapeConfig {
    ScrapeConfig {
        url: PAGE_URL.to_string(),
        run_env: RunEnv::Local,
        webdriver_url: "http://localhost:9515".to_string(),
        chrome_binary: "/usr/bin/google-chrome".to_string(),
        database: DatabaseConfig {
            db_type: DatabaseType::Sqlite,
            host: None,
            port: 5432,
            name: dir.join("golf.db").to_string_lossy().into_owned(),
            user: None,
            password: None,
        },
        output_csv: dir.join("data").join("course.csv"),
        timing: Timing {
            page_settle: Duration::ZERO,
            click_settle: Duration::ZERO,
            visibility_timeout: Duration::from_secs(10),
        },
    }
}
