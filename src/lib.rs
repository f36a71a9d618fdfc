// src/lib.rs

pub mod cli;
pub mod config;
pub mod course;
pub mod errors;
pub mod loader;
pub mod logging;
pub mod planner;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::{default_config_path, load_and_validate, ConfigFile};
use crate::errors::TermplanError;
use crate::loader::{load_course_graph, CourseCatalog};
use crate::planner::TermPlanner;
use crate::types::{format_schedule, parse_term, CourseName};

/// Effective settings after merging the config file with CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub prerequisites: PathBuf,
    pub completed: Vec<CourseName>,
    pub term_capacity: usize,
}

impl Settings {
    /// Merge `cfg` with the overrides in `args`. CLI values win; completed
    /// courses from both sources are combined.
    pub fn resolve(cfg: &ConfigFile, args: &CliArgs) -> errors::Result<Self> {
        let prerequisites = args
            .prereqs
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| cfg.courses.prerequisites.clone())
            .ok_or_else(|| {
                TermplanError::ConfigError(
                    "no prerequisite file given (use --prereqs or [courses].prerequisites)"
                        .to_string(),
                )
            })?;

        let term_capacity = args.term_capacity.unwrap_or(cfg.planner.term_capacity);
        if term_capacity == 0 {
            return Err(TermplanError::ConfigError(
                "--term-capacity must be >= 1 (got 0)".to_string(),
            ));
        }

        let mut completed = cfg.courses.completed.clone();
        for name in &args.completed {
            if !completed.contains(name) {
                completed.push(name.clone());
            }
        }

        Ok(Self {
            prerequisites,
            completed,
            term_capacity,
        })
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - the prerequisite loader
/// - the planner
/// - the requested command, whose report goes to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&cfg, &args)?;
    debug!(?settings, "resolved settings");

    let catalog = load_course_graph(&settings.prerequisites)?;
    catalog.mark_completed(&settings.completed)?;

    let planner =
        TermPlanner::new(catalog.root().clone()).with_term_capacity(settings.term_capacity)?;

    let output = execute(&args.command, &catalog, &planner)?;
    println!("{output}");
    Ok(())
}

/// Load the config named on the command line, or `Termplan.toml` if it
/// exists, or fall back to defaults.
pub fn load_config(path: Option<&str>) -> errors::Result<ConfigFile> {
    match path {
        Some(path) => load_and_validate(path),
        None => {
            let default_path = default_config_path();
            if default_path.is_file() {
                load_and_validate(&default_path)
            } else {
                debug!("no config file found; using defaults");
                Ok(ConfigFile::default())
            }
        }
    }
}

/// Run one command against a loaded graph and return its report.
pub fn execute(
    command: &Command,
    catalog: &CourseCatalog,
    planner: &TermPlanner,
) -> errors::Result<String> {
    match command {
        Command::Plan { courses } => {
            let schedule = planner.generate_schedule(courses)?;
            if schedule.is_empty() {
                return Ok("nothing to schedule".to_string());
            }
            Ok(format_schedule(&schedule))
        }
        Command::Validate { terms } => {
            let schedule: Vec<_> = terms.iter().map(|t| parse_term(t)).collect();
            let valid = planner.is_valid(&schedule);
            info!(terms = schedule.len(), valid, "validated schedule");
            Ok(if valid { "valid" } else { "invalid" }.to_string())
        }
        Command::Missing { course } => {
            let missing = planner.get_course(course)?.missing_prerequisites();
            if missing.is_empty() {
                Ok(format!("{course}: takeable"))
            } else {
                Ok(format!("{course}: missing {}", missing.join(", ")))
            }
        }
        Command::Show => Ok(describe_graph(catalog, planner)),
    }
}

/// Dry-run output: root, capacity, and each course with its direct
/// prerequisites.
fn describe_graph(catalog: &CourseCatalog, planner: &TermPlanner) -> String {
    let mut lines = vec![
        "termplan dry-run".to_string(),
        format!("  root = {}", catalog.root().name()),
        format!("  term_capacity = {}", planner.term_capacity()),
        String::new(),
        format!("courses ({}):", catalog.len()),
    ];

    for course in catalog.courses() {
        let marker = if course.is_completed() { " [completed]" } else { "" };
        lines.push(format!("  - {}{marker}", course.name()));

        let prerequisites: Vec<String> = course
            .prerequisites()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        if !prerequisites.is_empty() {
            lines.push(format!("      requires: {}", prerequisites.join(", ")));
        }
    }

    lines.join("\n")
}
