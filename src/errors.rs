// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermplanError {
    /// `take()` was called on a course whose prerequisites are not all
    /// completed.
    #[error("Course '{course}' is not takeable; missing prerequisites: {missing:?}")]
    Untakeable {
        course: String,
        missing: Vec<String>,
    },

    /// Adding the edge would close a cycle or duplicate an existing
    /// ancestor/descendant relationship.
    #[error("Cannot add '{prerequisite}' as a prerequisite of '{course}': already related in the prerequisite graph")]
    Prerequisite {
        course: String,
        prerequisite: String,
    },

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Schedule generation stalled; still unscheduled: {remaining:?}")]
    Stalled { remaining: Vec<String> },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Prerequisite data, line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Cycle detected in prerequisite data: {0}")]
    Cycle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TermplanError>;
