// src/lib.rs

//! Portal Core Library
//!
//! Pure view-model derivation for the member portal frontend: department
//! trees, event schedules, bilingual field resolution, and link catalogs.

pub mod config;
pub mod error;
pub mod locale;
pub mod models;
pub mod view;
