//! Shared types used across the NameSweep application.
//!
//! This module defines common newtypes that provide type safety and clear
//! domain modeling for usernames, platform names, and scan identifiers.

use crate::error::NamesweepError;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for the username being searched, with validation.
///
/// Usernames are trimmed on construction and must be non-empty and at most
/// 100 characters. No further character restrictions are applied: the
/// catalog's platforms have wildly different username rules, and the probe
/// layer splices the username into profile URLs textually.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a new `Username`, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns error if the trimmed value is empty or longer than 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, NamesweepError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(NamesweepError::Validation(
                "username must not be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(NamesweepError::Validation(format!(
                "username too long: must be at most 100 characters, got {}",
                trimmed.len()
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype for platform display names, used as catalog keys.
///
/// Platform names come from the catalog document verbatim (e.g. "GitHub",
/// "Stack Overflow") and must be non-empty, at most 100 characters, and
/// must not start with `$` (the catalog's reserved metadata prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformName(String);

impl PlatformName {
    /// Create a new `PlatformName` from a string.
    ///
    /// # Errors
    /// Returns error if the name is empty, too long, or a reserved metadata key.
    pub fn new(name: impl Into<String>) -> Result<Self, NamesweepError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(NamesweepError::Validation(
                "platform name must not be empty".to_string(),
            ));
        }

        if name.len() > 100 {
            return Err(NamesweepError::Validation(format!(
                "platform name too long: must be at most 100 characters, got {}",
                name.len()
            )));
        }

        if name.starts_with('$') {
            return Err(NamesweepError::Validation(format!(
                "platform name must not start with the reserved '$' prefix, got '{name}'"
            )));
        }

        Ok(Self(name))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype for scan session identifiers with validation.
///
/// Scan IDs must be valid UUIDs (v4 format).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanId(String);

impl ScanId {
    /// Create a new `ScanId` from a string.
    ///
    /// # Errors
    /// Returns error if the ID is not a valid UUID v4.
    pub fn new(id: impl Into<String>) -> Result<Self, NamesweepError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Create a new random `ScanId` using UUID v4.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that a string is a valid UUID v4.
    fn validate(id: &str) -> Result<(), NamesweepError> {
        static UUID_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = UUID_REGEX.get_or_init(|| {
            Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
                .expect("valid regex")
        });

        if regex.is_match(id) {
            Ok(())
        } else {
            Err(NamesweepError::Validation(format!(
                "invalid scan ID: must be a valid UUID v4, got '{id}'"
            )))
        }
    }
}

impl fmt::Display for ScanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positive hit: the username exists on this platform at this URL.
///
/// This is the only probe outcome retained in a scan's result set, and the
/// unit consumed by the export collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundAccount {
    /// Platform display name
    pub name: PlatformName,
    /// Profile URL that responded positively
    pub url: String,
}

/// Wrapper around `chrono::DateTime<Utc>` for consistent timestamp handling.
///
/// Provides serialization/deserialization and utility methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `DateTime<Utc>`.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the inner `DateTime<Utc>`.
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parse a timestamp from an RFC3339 string.
    pub fn from_rfc3339(s: &str) -> Result<Self, NamesweepError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| NamesweepError::Validation(format!("invalid timestamp: {e}")))
    }

    /// Format as RFC3339 string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Get seconds since Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
