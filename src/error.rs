use crate::validate::Issue;
use itertools::Itertools;
use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while reading settings or resolving sensor descriptions.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("malformed JSON5 settings: {0}")]
    Json5(#[from] json5::Error),

    #[error("key '{key}' is missing in section [{section}]")]
    MissingKey { section: String, key: String },

    #[error("sensor '{sensor}' has unknown sensor type '{value}'")]
    UnknownSensorType { sensor: String, value: String },

    #[error("no field named '{0}'")]
    UnknownKey(String),

    #[error("invalid value '{value}' for '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("{subject} failed validation: {}", .issues.iter().join("; "))]
    Validation { subject: String, issues: Vec<Issue> },
}
