use super::{Browser, BrowserError, Locator};
use crate::args::{RunEnv, ScrapeConfig};
use async_trait::async_trait;
use log::info;
use std::time::Duration;
use thirtyfour::ChromiumLikeCapabilities;
use thirtyfour::error::WebDriverErrorInner;
use thirtyfour::prelude::*;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.3 Safari/605.1.15";

const VISIBILITY_POLL: Duration = Duration::from_millis(250);

impl From<WebDriverError> for BrowserError {
    fn from(err: WebDriverError) -> Self {
        Self::Driver(err.to_string())
    }
}

impl From<Locator<'_>> for By {
    fn from(locator: Locator<'_>) -> Self {
        match locator {
            Locator::Css(css) => By::Css(css),
            Locator::XPath(xpath) => By::XPath(xpath),
        }
    }
}

/// `Ok(None)` when the element simply isn't there; any other driver error
/// (stale handle, dead session) is passed through.
fn missing_as_none<T>(result: WebDriverResult<T>) -> Result<Option<T>, BrowserError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if matches!(e.as_inner(), WebDriverErrorInner::NoSuchElement(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Chrome command line flags for a profile. The output schema doesn't
/// depend on the profile, only how the browser is started.
#[must_use]
pub fn chrome_arguments(run_env: RunEnv) -> Vec<String> {
    let mut args = vec![
        "--disable-gpu".to_string(),
        "--no-sandbox".to_string(),
        "--window-size=1920,1080".to_string(),
        format!("user-agent={USER_AGENT}"),
    ];
    if run_env == RunEnv::Cloud {
        args.extend(
            [
                "--headless=new",
                "--disable-dev-shm-usage",
                "--enable-logging",
                "--v=1",
                "--log-level=0",
            ]
            .map(String::from),
        );
    }
    args
}

/// A chrome session driven over the WebDriver protocol. Expects a
/// chromedriver (or compatible) listening at `webdriver_url`.
pub struct WebDriverBrowser {
    driver: WebDriver,
}

impl WebDriverBrowser {
    /// # Errors
    ///
    /// Will return `Err` if the capabilities are rejected or no session can be started
    pub async fn launch(config: &ScrapeConfig) -> Result<Self, BrowserError> {
        info!("Configuring WebDriver for {} environment.", config.run_env);
        let mut caps = DesiredCapabilities::chrome();
        for arg in chrome_arguments(config.run_env) {
            caps.add_arg(&arg)
                .map_err(|e| BrowserError::Launch(e.to_string()))?;
        }
        if config.run_env == RunEnv::Cloud {
            caps.set_binary(&config.chrome_binary)
                .map_err(|e| BrowserError::Launch(e.to_string()))?;
        }

        let driver = WebDriver::new(config.webdriver_url.as_str(), caps)
            .await
            .map_err(|e| {
                BrowserError::Launch(format!(
                    "{e} (is chromedriver running at {} and chrome installed?)",
                    config.webdriver_url
                ))
            })?;
        info!("Chrome WebDriver initialized.");
        Ok(Self { driver })
    }
}

#[async_trait]
impl Browser for WebDriverBrowser {
    type Element = WebElement;

    async fn goto(&self, url: &str) -> Result<(), BrowserError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn title(&self) -> Result<String, BrowserError> {
        Ok(self.driver.title().await?)
    }

    async fn current_url(&self) -> Result<String, BrowserError> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn find_text(&self, locator: Locator<'_>) -> Result<String, BrowserError> {
        let element = self
            .driver
            .find(By::from(locator))
            .await
            .map_err(|e| BrowserError::NotFound(format!("{locator:?}: {e}")))?;
        Ok(element.text().await?)
    }

    async fn find_all(&self, locator: Locator<'_>) -> Result<Vec<WebElement>, BrowserError> {
        Ok(self.driver.find_all(By::from(locator)).await?)
    }

    async fn child_text(
        &self,
        element: &WebElement,
        tag: &str,
    ) -> Result<Option<String>, BrowserError> {
        let Some(child) = missing_as_none(element.find(By::Tag(tag)).await)? else {
            return Ok(None);
        };
        Ok(Some(child.text().await?.trim().to_string()))
    }

    async fn attribute(
        &self,
        element: &WebElement,
        name: &str,
    ) -> Result<Option<String>, BrowserError> {
        Ok(element.attr(name).await?)
    }

    async fn click(&self, element: &WebElement) -> Result<(), BrowserError> {
        let args: Vec<serde_json::Value> = vec![element.to_json()?];
        self.driver.execute("arguments[0].click();", args).await?;
        Ok(())
    }

    async fn wait_visible(&self, id: &str, timeout: Duration) -> Result<(), BrowserError> {
        self.driver
            .query(By::Id(id))
            .wait(timeout, VISIBILITY_POLL)
            .and_displayed()
            .first()
            .await
            .map_err(|_| BrowserError::Timeout {
                id: id.to_string(),
                timeout,
            })?;
        Ok(())
    }

    async fn outer_html(&self, id: &str) -> Result<String, BrowserError> {
        let element = self
            .driver
            .find(By::Id(id))
            .await
            .map_err(|e| BrowserError::NotFound(format!("#{id}: {e}")))?;
        Ok(element.outer_html().await?)
    }

    async fn quit(self) -> Result<(), BrowserError> {
        self.driver.quit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloud_profile_is_headless() {
        let cloud = chrome_arguments(RunEnv::Cloud);
        assert!(cloud.iter().any(|a| a == "--headless=new"));
        assert!(cloud.iter().any(|a| a == "--disable-dev-shm-usage"));

        let local = chrome_arguments(RunEnv::Local);
        assert!(!local.iter().any(|a| a.starts_with("--headless")));
        assert!(local.iter().any(|a| a == "--no-sandbox"));
        assert!(local.iter().any(|a| a.starts_with("user-agent=")));
    }

    #[test]
    fn only_missing_elements_become_none() {
        let missing: WebDriverResult<()> = Err(thirtyfour::error::no_such_element("h4".to_string()));
        assert!(matches!(missing_as_none(missing), Ok(None)));

        let stale: WebDriverResult<()> = Err(WebDriverError::from_inner(
            WebDriverErrorInner::Timeout("stale element reference".to_string()),
        ));
        assert!(matches!(missing_as_none(stale), Err(BrowserError::Driver(msg)) if msg.contains("stale")));

        assert!(matches!(missing_as_none(Ok(7)), Ok(Some(7))));
    }
}
