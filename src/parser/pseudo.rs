//! Go pseudo-version classification
//!
//! Pseudo-versions pin a module to a commit rather than a tag:
//! - `v0.0.0-20231129151722-fdeea329fbba` (no base tag)
//! - `v1.1.1-0.20251215205057-2f3252140e00` (based on an existing tag)
//!
//! Every pseudo-version ends with a `YYYYMMDDHHMMSS` UTC timestamp followed by
//! a hyphen and the 12-character abbreviated commit hash.

use crate::error::VersionError;
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

// Trailing timestamp and commit hash. Only the end of the string matters.
static PSEUDO_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{14})-([a-f0-9]{12})$").unwrap());

// First run of 14 digits anywhere in the string
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{14}").unwrap());

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Returns true if the version is a commit-pinned pseudo-version
pub fn is_pseudo_version(version: &str) -> bool {
    PSEUDO_VERSION_RE.is_match(version)
}

/// Extracts the first 14-digit timestamp found in a version string
pub fn extract_timestamp(version: &str) -> Result<&str, VersionError> {
    TIMESTAMP_RE
        .find(version)
        .map(|m| m.as_str())
        .ok_or_else(|| VersionError::NoTimestampFound {
            version: version.to_string(),
        })
}

/// Returns whichever version carries the more recent timestamp.
///
/// Ties resolve to `a`. Timestamps are fixed-width, so comparing them as
/// strings orders them chronologically.
pub fn newer_version<'a>(a: &'a str, b: &'a str) -> Result<&'a str, VersionError> {
    let ts_a = extract_timestamp(a)?;
    let ts_b = extract_timestamp(b)?;
    if ts_a >= ts_b {
        Ok(a)
    } else {
        Ok(b)
    }
}

/// A version string confirmed to be a pseudo-version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudoVersion<'a> {
    raw: &'a str,
    timestamp: &'a str,
    commit: &'a str,
}

impl<'a> PseudoVersion<'a> {
    /// Parse a pseudo-version, returning None for tagged versions
    pub fn parse(version: &'a str) -> Option<Self> {
        let caps = PSEUDO_VERSION_RE.captures(version)?;
        Some(Self {
            raw: version,
            timestamp: caps.get(1)?.as_str(),
            commit: caps.get(2)?.as_str(),
        })
    }

    /// The full version string
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// The 14-digit timestamp adjacent to the commit hash
    pub fn timestamp(&self) -> &'a str {
        self.timestamp
    }

    /// The abbreviated commit hash
    pub fn commit(&self) -> &'a str {
        self.commit
    }

    /// The commit time, if the timestamp is a real calendar date
    pub fn committed_at(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(self.timestamp, TIMESTAMP_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}
