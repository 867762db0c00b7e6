use std::time::Duration;

use url::Url;

use crate::adapters::ListShape;
use crate::error::{Error, Result};

pub const DEFAULT_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LOGIN_PATH: &str = "/api/auth/login";
pub const DEFAULT_LOGOUT_PATH: &str = "/api/auth/logout";

/// Connection settings for the Hectane API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub login_path: String,
    pub logout_path: String,
    /// How `GET /api/folders` wraps its array.
    pub folder_list: ListShape,
    /// `None` waits forever, which is what the browser front end did.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            login_path: DEFAULT_LOGIN_PATH.into(),
            logout_path: DEFAULT_LOGOUT_PATH.into(),
            folder_list: ListShape::Bare,
            timeout: None,
        }
    }

    /// Read `HECTANE_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("HECTANE_URL").unwrap_or_else(|| DEFAULT_URL.into());
        let base_url = Url::parse(&raw_url).map_err(|e| Error::Config {
            key: "HECTANE_URL",
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config {
                key: "HECTANE_URL",
                reason: format!("{raw_url} cannot be used as a base url"),
            });
        }

        let mut config = Self::new(base_url);

        if let Some(path) = lookup("HECTANE_LOGIN_PATH") {
            config.login_path = path;
        }
        if let Some(path) = lookup("HECTANE_LOGOUT_PATH") {
            config.logout_path = path;
        }

        config.folder_list = match lookup("HECTANE_FOLDER_LIST").as_deref() {
            None | Some("bare") => ListShape::Bare,
            Some("keyed") => ListShape::Keyed("folders"),
            Some(other) => {
                return Err(Error::Config {
                    key: "HECTANE_FOLDER_LIST",
                    reason: format!("expected `bare` or `keyed`, got `{other}`"),
                });
            }
        };

        if let Some(secs) = lookup("HECTANE_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| Error::Config {
                key: "HECTANE_TIMEOUT_SECS",
                reason: format!("`{secs}` is not a whole number of seconds"),
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
