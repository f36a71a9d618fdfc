// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::planner::DEFAULT_TERM_CAPACITY;
use crate::types::CourseName;

/// Configuration exactly as deserialized from TOML, before validation.
///
/// ```toml
/// [planner]
/// term_capacity = 5
///
/// [courses]
/// prerequisites = "prereqs.txt"
/// completed = ["CSC101"]
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub planner: PlannerSection,

    #[serde(default)]
    pub courses: CoursesSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub planner: PlannerSection,
    pub courses: CoursesSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(planner: PlannerSection, courses: CoursesSection) -> Self {
        Self { planner, courses }
    }
}

/// `[planner]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerSection {
    /// Maximum number of courses in one term.
    #[serde(default = "default_term_capacity")]
    pub term_capacity: usize,
}

fn default_term_capacity() -> usize {
    DEFAULT_TERM_CAPACITY
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            term_capacity: default_term_capacity(),
        }
    }
}

/// `[courses]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoursesSection {
    /// Prerequisite pair file. Relative paths are resolved against the
    /// directory holding the config file.
    #[serde(default)]
    pub prerequisites: Option<PathBuf>,

    /// Courses already completed before planning starts.
    #[serde(default)]
    pub completed: Vec<CourseName>,
}
