// src/models/link.rs

//! External link records for the social/CTA catalogs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An external link entry.
///
/// `slug` is the stable identity used when merging the static default catalog
/// with the remotely fetched override catalog. The `url` of the `wechat`
/// entry is an opaque account handle rather than a web address; this layer
/// never interprets URLs, the presentation layer keys off the slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkRecord {
    /// API row identifier, absent for entries from the static catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Display name
    pub name: String,

    /// Stable identity key, unique within a catalog
    pub slug: String,

    /// Icon identifier understood by the frontend icon set
    pub icon_name: String,

    /// Target URL, or an opaque platform handle
    pub url: String,

    /// Ascending sort key; ties are broken by catalog merge order
    pub order: i64,
}

impl LinkRecord {
    /// Load link records from a JSON file (an API response capture).
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
