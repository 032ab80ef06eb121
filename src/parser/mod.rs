//! Version string parsing
//!
//! This module recognizes Go pseudo-versions (commit-pinned versions) and
//! compares them by their embedded commit timestamp.

mod pseudo;

pub use pseudo::{extract_timestamp, is_pseudo_version, newer_version, PseudoVersion};
