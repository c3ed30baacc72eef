//! Host configuration read once at startup.
//!
//! Declarative settings for the page shell and the dark mode toggle. The
//! bundled `config/host.json` is compiled in; any key it omits takes the
//! value from [`HostConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::state::theme::Theme;
use crate::util::cookie::{COOKIE_MAX_AGE_SECS, DARK_MODE_COOKIE};
use crate::util::render::THEME_ATTRIBUTE;

const BUNDLED: &str = include_str!("../config/host.json");

/// Longest cookie lifetime browsers honor (400 days).
pub const MAX_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 400;

/// Errors produced while loading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the toggle cannot work with.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Document title.
    pub title: String,
    /// The single stylesheet bundle.
    pub stylesheet: String,
    /// Content of `<meta name="color-scheme">`.
    pub color_scheme: String,
    /// Theme used when the user has never chosen one.
    pub fallback: Theme,
    pub cookie_name: String,
    pub cookie_max_age_secs: i64,
    /// Root-element attribute carrying the theme token.
    pub theme_attribute: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            title: "Greek Alphabet".into(),
            stylesheet: "/pkg/greek-alphabet.css".into(),
            color_scheme: "light dark".into(),
            fallback: Theme::Light,
            cookie_name: DARK_MODE_COOKIE.into(),
            cookie_max_age_secs: COOKIE_MAX_AGE_SECS,
            theme_attribute: THEME_ATTRIBUTE.into(),
        }
    }
}

impl HostConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The compiled-in config, or defaults if it does not load.
    #[must_use]
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("bundled host config rejected, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_name.is_empty() {
            return Err(ConfigError::Invalid("cookie_name must not be empty".into()));
        }
        if !is_cookie_token(&self.cookie_name) {
            return Err(ConfigError::Invalid(format!(
                "cookie_name must be a cookie token (no spaces, separators or control characters), got {:?}",
                self.cookie_name
            )));
        }
        if self.theme_attribute.trim().is_empty() {
            return Err(ConfigError::Invalid("theme_attribute must not be empty".into()));
        }
        if !(1..=MAX_COOKIE_MAX_AGE_SECS).contains(&self.cookie_max_age_secs) {
            return Err(ConfigError::Invalid(format!(
                "cookie_max_age_secs must be in 1..={MAX_COOKIE_MAX_AGE_SECS}, got {}",
                self.cookie_max_age_secs
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn cookie_max_age(&self) -> Duration {
        Duration::seconds(self.cookie_max_age_secs)
    }
}

/// RFC 6265 `cookie-name`: visible ASCII minus the HTTP separators.
fn is_cookie_token(name: &str) -> bool {
    const SEPARATORS: &str = "()<>@,;:\\\"/[]?={}";
    !name.is_empty() && name.chars().all(|c| c.is_ascii_graphic() && !SEPARATORS.contains(c))
}
