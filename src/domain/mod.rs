//! Core domain models for pseudoup
//!
//! This module contains the fundamental types used throughout the application:
//! - Manifest entries and the pseudo-versioned dependencies selected from them
//! - Update and failure records produced by a check
//! - The per-run summary handed to output formatters

mod dependency;
mod summary;
mod update_result;

pub use dependency::{Dependency, ManifestEntry};
pub use summary::CheckSummary;
pub use update_result::{DependencyFailure, Update};
