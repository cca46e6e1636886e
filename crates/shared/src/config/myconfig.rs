use anyhow::{Context, Result, anyhow};
use std::fmt;

pub const DEFAULT_ACCEPT: &str = "application/json";
pub const DEFAULT_USER_AGENT: &str = concat!("roundup/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Config {
    pub is_dev: bool,
    pub starling: StarlingConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_dev = match lookup("APP_ENV").as_deref() {
            None | Some("development") => true,
            Some("production") => false,
            Some(other) => {
                return Err(anyhow!(
                    "APP_ENV must be 'development' or 'production', got '{other}'",
                ));
            }
        };

        Ok(Self {
            is_dev,
            starling: StarlingConfig::from_lookup(&lookup)?,
        })
    }
}

/// Connection settings for the upstream banking API.
#[derive(Clone)]
pub struct StarlingConfig {
    pub base_url: String,
    pub access_token: String,
    pub accept: String,
    pub user_agent: String,
}

impl StarlingConfig {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            accept: DEFAULT_ACCEPT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("STARLING_BASE_URL").context("Missing env: STARLING_BASE_URL")?;
        let access_token =
            lookup("STARLING_ACCESS_TOKEN").context("Missing env: STARLING_ACCESS_TOKEN")?;

        if access_token.trim().is_empty() {
            return Err(anyhow!("STARLING_ACCESS_TOKEN must not be empty"));
        }

        let accept = lookup("STARLING_ACCEPT").unwrap_or_else(|| DEFAULT_ACCEPT.to_string());
        let user_agent =
            lookup("STARLING_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            base_url,
            access_token,
            accept,
            user_agent,
        })
    }
}

impl fmt::Debug for StarlingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarlingConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("accept", &self.accept)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
