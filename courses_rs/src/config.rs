//! Site configuration.
//!
//! The fetcher never reads the environment itself; callers build a
//! [`SiteConfig`] once at startup and hand it over.

use crate::error::ConfigError;

/// Environment variable holding the Moodle base URL.
pub const MOODLE_URL_VAR: &str = "MOODLE_URL";
/// Environment variable holding the Moodle web-service token.
pub const MOODLE_TOKEN_VAR: &str = "MOODLE_TOKEN";

/// Raw, possibly incomplete configuration as read at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub moodle_url: Option<String>,
    pub moodle_token: Option<String>,
}

/// Validated configuration: both settings present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodleConfig {
    base_url: String,
    token: String,
}

impl SiteConfig {
    /// Build from optional values. Whitespace is trimmed, one trailing slash is
    /// dropped from the URL and empty values count as absent.
    pub fn new(moodle_url: Option<&str>, moodle_token: Option<&str>) -> Self {
        Self {
            moodle_url: moodle_url.and_then(normalize_url),
            moodle_token: moodle_token.and_then(non_empty),
        }
    }

    /// Read `MOODLE_URL` and `MOODLE_TOKEN` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (used by tests and embedders).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(MOODLE_URL_VAR);
        let token = lookup(MOODLE_TOKEN_VAR);
        Self::new(url.as_deref(), token.as_deref())
    }

    /// Names of the settings that are absent, in URL, token order.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.moodle_url.is_none() {
            missing.push(MOODLE_URL_VAR);
        }
        if self.moodle_token.is_none() {
            missing.push(MOODLE_TOKEN_VAR);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.moodle_url.is_some() && self.moodle_token.is_some()
    }

    /// Validate into a [`MoodleConfig`].
    pub fn moodle(&self) -> Result<MoodleConfig, ConfigError> {
        match (&self.moodle_url, &self.moodle_token) {
            (Some(base_url), Some(token)) => Ok(MoodleConfig {
                base_url: base_url.clone(),
                token: token.clone(),
            }),
            _ => Err(ConfigError::Missing {
                settings: self.missing_settings(),
            }),
        }
    }
}

impl MoodleConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn normalize_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    non_empty(trimmed.strip_suffix('/').unwrap_or(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn strips_single_trailing_slash() {
        let site = SiteConfig::new(Some("https://lms.example.ac.tz/"), Some("abc"));
        assert_eq!(site.moodle_url.as_deref(), Some("https://lms.example.ac.tz"));

        let site = SiteConfig::new(Some("https://lms.example.ac.tz//"), Some("abc"));
        assert_eq!(site.moodle_url.as_deref(), Some("https://lms.example.ac.tz/"));
    }

    #[test]
    fn empty_values_count_as_absent() {
        let site = SiteConfig::new(Some(""), Some("   "));
        assert_eq!(site.missing_settings(), vec![MOODLE_URL_VAR, MOODLE_TOKEN_VAR]);

        let site = SiteConfig::new(Some("/"), Some("abc"));
        assert_eq!(site.missing_settings(), vec![MOODLE_URL_VAR]);
    }

    #[test]
    fn moodle_reports_every_missing_setting() {
        let err = SiteConfig::new(None, None).moodle().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing {
                settings: vec![MOODLE_URL_VAR, MOODLE_TOKEN_VAR]
            }
        );

        let err = SiteConfig::new(Some("https://lms"), None).moodle().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing {
                settings: vec![MOODLE_TOKEN_VAR]
            }
        );
    }

    #[test]
    fn complete_config_validates() {
        let site = SiteConfig::new(Some(" https://lms.example.ac.tz/ "), Some(" tok "));
        assert!(site.is_complete());
        let moodle = site.moodle().unwrap();
        assert_eq!(moodle.base_url(), "https://lms.example.ac.tz");
        assert_eq!(moodle.token(), "tok");
    }

    #[test]
    fn from_lookup_reads_both_variables() {
        let site = SiteConfig::from_lookup(lookup_from(&[
            (MOODLE_URL_VAR, "https://lms.example.ac.tz"),
            (MOODLE_TOKEN_VAR, "secret"),
        ]));
        assert_eq!(site.moodle_url.as_deref(), Some("https://lms.example.ac.tz"));
        assert_eq!(site.moodle_token.as_deref(), Some("secret"));

        let site = SiteConfig::from_lookup(lookup_from(&[(MOODLE_TOKEN_VAR, "secret")]));
        assert!(!site.is_complete());
    }
}
