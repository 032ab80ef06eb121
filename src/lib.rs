//! pseudoup - pseudo-version update checker library
//!
//! This library finds Go dependencies pinned to a pseudo-version
//! (`v0.0.0-YYYYMMDDHHMMSS-abcdef123456`) and reports the ones whose
//! default branch (`main` or `master`) has moved on to a newer commit.

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod progress;
pub mod registry;
pub mod update;
