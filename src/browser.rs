//! The slice of browser automation the scraper needs.
//!
//! [`Browser`] is implemented by [`webdriver::WebDriverBrowser`] for real runs
//! and by in-memory fakes in the tests, so the extraction logic never needs a
//! rendering engine to be exercised.

pub mod webdriver;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("failed to launch browser session: {0}")]
    Launch(String),
    #[error("timed out after {timeout:?} waiting for #{id} to become visible")]
    Timeout { id: String, timeout: Duration },
    #[error("element not found: {0}")]
    NotFound(String),
    #[error("webdriver error: {0}")]
    Driver(String),
}

/// How to find elements on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator<'a> {
    Css(&'a str),
    XPath(&'a str),
}

#[async_trait]
pub trait Browser: Send + Sync {
    /// Handle to an element found on the current page.
    type Element: Send + Sync;

    async fn goto(&self, url: &str) -> Result<(), BrowserError>;
    async fn title(&self) -> Result<String, BrowserError>;
    async fn current_url(&self) -> Result<String, BrowserError>;
    /// Text of the first element matching `locator`.
    async fn find_text(&self, locator: Locator<'_>) -> Result<String, BrowserError>;
    async fn find_all(&self, locator: Locator<'_>) -> Result<Vec<Self::Element>, BrowserError>;
    /// Text of the first descendant of `element` with tag `tag`, if any.
    async fn child_text(
        &self,
        element: &Self::Element,
        tag: &str,
    ) -> Result<Option<String>, BrowserError>;
    async fn attribute(
        &self,
        element: &Self::Element,
        name: &str,
    ) -> Result<Option<String>, BrowserError>;
    /// Script-dispatched click; isn't blocked by overlapping elements.
    async fn click(&self, element: &Self::Element) -> Result<(), BrowserError>;
    /// Block until the element with `id` is displayed, or fail with
    /// [`BrowserError::Timeout`].
    async fn wait_visible(&self, id: &str, timeout: Duration) -> Result<(), BrowserError>;
    async fn outer_html(&self, id: &str) -> Result<String, BrowserError>;
    async fn quit(self) -> Result<(), BrowserError>;
}
