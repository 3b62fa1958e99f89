//! Validation issues and the policy deciding whether they are fatal.

use crate::error::{Error, Result};
use thiserror::Error;
use tracing::warn;

/// What to do when a description violates one of its constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Log every issue and keep going with the values as loaded.
    #[default]
    Warn,
    /// Log every issue, then fail with [`Error::Validation`].
    Strict,
}

/// A single violated constraint. Values are reported, never corrected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Issue {
    #[error("upper FOV limit ({upper}) is below lower FOV limit ({lower})")]
    InvertedFov { upper: f32, lower: f32 },

    #[error("{key} must be greater than zero, found {value}")]
    NotPositive { key: &'static str, value: f32 },

    #[error("{key} must not be negative, found {value}")]
    Negative { key: &'static str, value: f32 },

    #[error("{key} must be within {bounds}, found {value}")]
    OutOfRange {
        key: &'static str,
        value: f32,
        bounds: &'static str,
    },
}

/// Logs `issues` against `subject` and applies `policy`.
pub fn enforce(subject: &str, issues: Vec<Issue>, policy: ValidationPolicy) -> Result<Vec<Issue>> {
    for issue in &issues {
        warn!("{subject}: {issue}");
    }

    match policy {
        ValidationPolicy::Strict if !issues.is_empty() => Err(Error::Validation {
            subject: subject.to_string(),
            issues,
        }),
        _ => Ok(issues),
    }
}
