use crate::utils::error::{PortfolioError, Result};
use crate::utils::retry::RetryPolicy;
use crate::utils::validation::{
    validate_range, validate_required_field, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

pub const ENV_CONTENT_SOURCE: &str = "PORTFOLIO_CONTENT_SOURCE";
pub const ENV_BACKEND_URL: &str = "PORTFOLIO_BACKEND_URL";

/// Upper bound on `remote.retry_attempts`, first attempt included.
pub const MAX_RETRY_ATTEMPTS: u64 = 5;

static VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("variable pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    #[default]
    Static,
    Remote,
}

impl FromStr for ContentSource {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(ContentSource::Static),
            "remote" => Ok(ContentSource::Remote),
            other => Err(PortfolioError::InvalidConfigValueError {
                field: "content.source".to_string(),
                value: other.to_string(),
                reason: "Expected 'static' or 'remote'".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub source: ContentSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub backend_url: Option<String>,
    pub timeout_seconds: u64,
    pub retry_attempts: u64,
    pub retry_delay_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            timeout_seconds: 10,
            retry_attempts: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_attempts as usize,
            Duration::from_millis(self.retry_delay_ms),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub content: ContentConfig,
    pub remote: RemoteConfig,
}

impl SiteConfig {
    /// Reads the optional TOML file, applies environment overrides, then validates.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |_| {})
    }

    /// Like [`SiteConfig::load`], with `overrides` applied after the
    /// environment and before validation.
    pub fn load_with<F>(path: Option<&Path>, overrides: F) -> Result<Self>
    where
        F: FnOnce(&mut SiteConfig),
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_vars(content, |name| std::env::var(name).ok());

        toml::from_str(&processed).map_err(|e| PortfolioError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Environment wins over the file. `lookup` is `std::env::var` outside tests.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(ENV_CONTENT_SOURCE) {
            self.content.source = source.parse()?;
        }
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|u| !u.trim().is_empty()) {
            self.remote.backend_url = Some(url.trim().to_string());
        }
        Ok(())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_range("remote.timeout_seconds", self.remote.timeout_seconds, 1, 120)?;
        validate_range(
            "remote.retry_attempts",
            self.remote.retry_attempts,
            1,
            MAX_RETRY_ATTEMPTS,
        )?;

        if self.content.source == ContentSource::Remote {
            let url = validate_required_field("remote.backend_url", &self.remote.backend_url)?;
            validate_url("remote.backend_url", url)?;
        } else if let Some(url) = &self.remote.backend_url {
            validate_url("remote.backend_url", url)?;
        }
        Ok(())
    }
}

/// Replaces `${NAME}` with the variable's value; unknown names are left as written.
fn substitute_vars<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    VAR_PATTERN.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    })
    .to_string()
}
