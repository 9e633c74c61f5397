//! Core error types.
//!
//! Two shapes live here:
//!
//! - [`CoreError`]: a single failure such as a bad time value or an
//!   unsupported interval.
//! - [`ValidationErrors`]: a structured list of [`FieldError`]s, returned when
//!   a whole configuration or event batch is checked at once.

use std::fmt;

use thiserror::Error;

/// The error type for `ws-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid time {hours}:{minutes:02}: hours must be 0-23 and minutes 0-59")]
    InvalidTime { hours: u32, minutes: u32 },

    #[error("unsupported time slot interval {0}: expected 15, 30, or 60 minutes")]
    InvalidInterval(u32),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Shorthand result type for all `ws-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;

// ── FieldError ────────────────────────────────────────────────────────────────

/// One validation failure, tied to the field that caused it.
///
/// `field` is a path such as `"startHour"` or `"events[3].endTime"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    pub field:   String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }

    /// Prefix the field path, e.g. `endTime` → `events[2].endTime`.
    pub fn within(mut self, prefix: &str) -> Self {
        self.field = format!("{prefix}.{}", self.field);
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ── ValidationErrors ──────────────────────────────────────────────────────────

/// A non-empty list of [`FieldError`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// `Ok(())` when no errors were collected, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
