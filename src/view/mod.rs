// src/view/mod.rs

//! View-model derivation entry points.
//!
//! - `build_department_forest`: org-chart tree from flat parent pointers
//! - `classify_events`: upcoming/ongoing/past partition against a supplied instant
//! - `merge_link_catalogs`: default catalog with per-slug remote overrides
//!
//! Every function here is a pure function of its arguments: no clock reads,
//! no I/O, no caching, fresh owned output per call.

pub mod hierarchy;
pub mod links;
pub mod schedule;

pub use hierarchy::build_department_forest;
pub use links::merge_link_catalogs;
pub use schedule::{classify_events, EventBuckets, TemporalBucket};
