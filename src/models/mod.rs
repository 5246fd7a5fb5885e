// src/models/mod.rs

//! Record types fetched from the portal content API.
//!
//! Field names mirror the upstream JSON wire format so the types deserialize
//! straight from fetch responses. All values are render-scoped: constructed
//! from a response or a static literal, transformed, and discarded.

mod department;
mod event;
mod link;

// Re-export all public types
pub use department::{DepartmentNode, DepartmentRecord};
pub use event::{EventRecord, EventStatus};
pub use link::LinkRecord;
