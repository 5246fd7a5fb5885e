// src/locale.rs

//! Locale tags and bilingual field resolution.
//!
//! The portal serves exactly two locales: Chinese (`zh`), whose text lives in
//! the base fields of every record, and English (`en`), carried in optional
//! `*_en` companion fields. Resolution is a per-field fallback, not a full
//! locale-negotiation algorithm.

use serde::{Deserialize, Serialize};

/// Supported portal locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Chinese, the base-field locale.
    Zh,
    /// English, the alternate-field locale. Site-wide fallback.
    #[default]
    En,
}

impl Locale {
    /// Canonical tag for this locale.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// Parse a locale tag, tolerant of case and region suffixes
    /// (e.g. `en-US`, `zh_CN`).
    pub fn parse(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "zh" => Some(Locale::Zh),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Parse a locale tag, falling back to the site default when the tag is
    /// missing or unrecognized (e.g. a stale cookie value).
    pub fn parse_or_default(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }

    /// Resolve a bilingual field pair for this locale.
    ///
    /// Returns the alternate (`*_en`) value when this locale is English and
    /// the alternate is present and non-empty; otherwise the base value.
    /// An absent base yields the empty string. Never fails.
    pub fn resolve_field<'a>(self, base: Option<&'a str>, alternate: Option<&'a str>) -> &'a str {
        if self == Locale::En {
            if let Some(alt) = alternate {
                if !alt.is_empty() {
                    return alt;
                }
            }
        }
        base.unwrap_or("")
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
