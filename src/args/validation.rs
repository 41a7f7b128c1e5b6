use super::types::{Args, DatabaseConfig, DatabaseType, ScrapeConfig, Timing};
use std::fs;
use std::time::Duration;

const SECRETS_LOCATIONS: [&str; 2] = ["/secrets/db_password", "/run/secrets/db_password"];

impl Args {
    /// Validate the arguments and turn them into the run configuration.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database configuration is incomplete, the
    /// password secrets file can't be read, or the url/timeout are unusable
    pub fn validate(self) -> Result<ScrapeConfig, String> {
        if self.db_name.trim().is_empty() {
            return Err("Database name is required".to_string());
        }
        let password = if self.db_type == DatabaseType::Postgres {
            if self.db_user.as_deref().is_none_or(str::is_empty) {
                return Err("Postgres user is required".to_string());
            }
            if self.db_host.as_deref().is_none_or(str::is_empty) {
                return Err("Postgres host is required".to_string());
            }
            match self.db_password {
                Some(password) => Some(resolve_secret(&password)?),
                None => return Err("Postgres password is required".to_string()),
            }
        } else {
            self.db_password
        };

        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(format!("The url '{}' is not an http(s) url.", self.url));
        }
        if self.visibility_timeout_secs == 0 {
            return Err("Visibility timeout must be at least one second".to_string());
        }

        Ok(ScrapeConfig {
            url: self.url,
            run_env: self.run_env,
            webdriver_url: self.webdriver_url,
            chrome_binary: self.chrome_binary,
            database: DatabaseConfig {
                db_type: self.db_type,
                host: self.db_host,
                port: self.db_port,
                name: self.db_name,
                user: self.db_user,
                password,
            },
            output_csv: self.output_csv,
            timing: Timing {
                visibility_timeout: Duration::from_secs(self.visibility_timeout_secs),
                ..Timing::default()
            },
        })
    }
}

/// If `value` names one of the known secrets files, return its trimmed
/// contents; otherwise `value` is the password itself.
///
/// # Errors
///
/// Will return `Err` if the secrets file can't be read
pub fn resolve_secret(value: &str) -> Result<String, String> {
    if SECRETS_LOCATIONS.contains(&value) {
        let contents = fs::read_to_string(value)
            .map_err(|e| format!("The password file '{value}' is not readable: {e}"))?;
        Ok(contents.trim().to_string())
    } else {
        Ok(value.to_string())
    }
}
