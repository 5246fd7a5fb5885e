// src/view/links.rs

//! Link catalog merging.
//!
//! The frontend ships a static default catalog so the social/CTA links
//! render before (or without) the remote catalog; once the fetch resolves,
//! its records replace the defaults slug by slug.

use std::collections::HashMap;

use crate::models::LinkRecord;

/// Merge the static default catalog with a remotely fetched override catalog.
///
/// Every slug present in either catalog appears exactly once in the result.
/// An override replaces the default record wholesale, keeping the default's
/// insertion position; slugs only present in the overrides append after the
/// defaults. The result is sorted ascending by `order`, and the sort is
/// stable, so equal orders keep that merge order.
pub fn merge_link_catalogs(
    defaults: &[LinkRecord],
    overrides: Option<&[LinkRecord]>,
) -> Vec<LinkRecord> {
    let mut merged: Vec<LinkRecord> = Vec::with_capacity(defaults.len());
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(defaults.len());

    for link in defaults.iter().chain(overrides.into_iter().flatten()) {
        match positions.get(link.slug.as_str()) {
            Some(&pos) => merged[pos] = link.clone(),
            None => {
                positions.insert(link.slug.as_str(), merged.len());
                merged.push(link.clone());
            }
        }
    }

    merged.sort_by_key(|link| link.order);
    merged
}
