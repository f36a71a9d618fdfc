// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TermplanError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::TermplanError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.planner, raw.courses))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_planner(cfg)?;
    validate_completed(cfg)?;
    Ok(())
}

fn validate_planner(cfg: &RawConfigFile) -> Result<()> {
    if cfg.planner.term_capacity == 0 {
        return Err(TermplanError::ConfigError(
            "[planner].term_capacity must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_completed(cfg: &RawConfigFile) -> Result<()> {
    let mut seen = HashSet::new();
    for name in cfg.courses.completed.iter() {
        if name.trim().is_empty() {
            return Err(TermplanError::ConfigError(
                "[courses].completed must not contain empty course names".to_string(),
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(TermplanError::ConfigError(format!(
                "course '{}' is listed more than once in [courses].completed",
                name
            )));
        }
    }
    Ok(())
}
