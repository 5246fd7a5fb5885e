// src/config.rs

//! Application configuration structures.
//!
//! Carries the static default link catalog and the locale settings. The
//! derivation functions never read configuration themselves; a host loads
//! this once and passes the values in as plain data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::locale::Locale;
use crate::models::LinkRecord;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locale selection settings
    #[serde(default)]
    pub locale: LocaleSettings,

    /// Static default link catalog, rendered until the remote catalog resolves
    #[serde(default = "defaults::default_links")]
    pub links: Vec<LinkRecord>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if Locale::parse(&self.locale.fallback).is_none() {
            return Err(AppError::validation(format!(
                "locale.fallback '{}' is not a supported locale",
                self.locale.fallback
            )));
        }
        if self.locale.supported.is_empty() {
            return Err(AppError::validation("locale.supported is empty"));
        }
        for tag in &self.locale.supported {
            if Locale::parse(tag).is_none() {
                return Err(AppError::validation(format!(
                    "locale.supported contains unknown tag '{tag}'"
                )));
            }
        }
        if !self.locale.supported.contains(&self.locale.fallback) {
            return Err(AppError::validation(
                "locale.fallback is not listed in locale.supported",
            ));
        }

        if self.links.is_empty() {
            return Err(AppError::validation("No default links defined"));
        }
        let mut slugs: Vec<&str> = self.links.iter().map(|l| l.slug.as_str()).collect();
        slugs.sort_unstable();
        for pair in slugs.windows(2) {
            if pair[0] == pair[1] {
                return Err(AppError::validation(format!(
                    "Duplicate link slug '{}' in default catalog",
                    pair[0]
                )));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleSettings::default(),
            links: defaults::default_links(),
        }
    }
}

/// Locale selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleSettings {
    /// Locale served when the visitor carries no (or an unknown) tag
    #[serde(default = "defaults::fallback_locale")]
    pub fallback: String,

    /// Locale tags the portal serves
    #[serde(default = "defaults::supported_locales")]
    pub supported: Vec<String>,

    /// Cookie the routing layer stores the active tag in
    #[serde(default = "defaults::locale_cookie")]
    pub cookie_name: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            fallback: defaults::fallback_locale(),
            supported: defaults::supported_locales(),
            cookie_name: defaults::locale_cookie(),
        }
    }
}

mod defaults {
    use crate::models::LinkRecord;

    // Locale defaults
    pub fn fallback_locale() -> String {
        "en".into()
    }
    pub fn supported_locales() -> Vec<String> {
        vec!["en".into(), "zh".into()]
    }
    pub fn locale_cookie() -> String {
        "i18next".into()
    }

    // Link catalog defaults
    pub fn default_links() -> Vec<LinkRecord> {
        vec![
            LinkRecord {
                id: None,
                name: "Instagram".to_string(),
                slug: "instagram".to_string(),
                icon_name: "Instagram".to_string(),
                url: "https://instagram.com/uoftcssa".to_string(),
                order: 0,
            },
            LinkRecord {
                id: None,
                name: "WeChat".to_string(),
                slug: "wechat".to_string(),
                icon_name: "MessageCircle".to_string(),
                // Account handle, not a web address
                url: "uoftcssa".to_string(),
                order: 1,
            },
            LinkRecord {
                id: None,
                name: "LinkedIn".to_string(),
                slug: "linkedin".to_string(),
                icon_name: "Linkedin".to_string(),
                url: "https://www.linkedin.com/company/uoft-cssa".to_string(),
                order: 2,
            },
            LinkRecord {
                id: None,
                name: "Email".to_string(),
                slug: "email".to_string(),
                icon_name: "Mail".to_string(),
                url: "mailto:contact@cssa.ca".to_string(),
                order: 4,
            },
            LinkRecord {
                id: None,
                name: "Join Club".to_string(),
                slug: "join-club".to_string(),
                icon_name: "UserPlus".to_string(),
                url: "https://docs.google.com/forms/d/e/1FAIpQLSe_placeholder/viewform".to_string(),
                order: 5,
            },
        ]
    }
}
