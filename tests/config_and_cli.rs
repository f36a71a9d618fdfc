// tests/config_and_cli.rs
mod common;
use crate::common::builders::CourseGraphBuilder;
use crate::common::TestResult;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tempfile::{tempdir, NamedTempFile};
use termplan::cli::{CliArgs, Command, LogLevel};
use termplan::config::{load_and_validate, ConfigFile, RawConfigFile};
use termplan::errors::TermplanError;
use termplan::logging::effective_level;
use termplan::planner::{TermPlanner, DEFAULT_TERM_CAPACITY};
use termplan::{execute, Settings};

#[test]
fn defaults_apply_to_an_empty_file() -> TestResult {
    let file = NamedTempFile::new()?;
    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.planner.term_capacity, DEFAULT_TERM_CAPACITY);
    assert!(cfg.courses.prerequisites.is_none());
    assert!(cfg.courses.completed.is_empty());
    Ok(())
}

#[test]
fn relative_prerequisite_path_is_resolved_against_the_config_dir() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Termplan.toml");
    std::fs::write(
        &path,
        r#"
[planner]
term_capacity = 3

[courses]
prerequisites = "data/prereqs.txt"
completed = ["CSC101"]
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.planner.term_capacity, 3);
    assert_eq!(
        cfg.courses.prerequisites,
        Some(dir.path().join("data/prereqs.txt"))
    );
    assert_eq!(cfg.courses.completed, vec!["CSC101"]);
    Ok(())
}

#[test]
fn zero_term_capacity_is_a_config_error() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(file, "[planner]\nterm_capacity = 0\n")?;

    match load_and_validate(file.path()) {
        Err(TermplanError::ConfigError(msg)) => assert!(msg.contains("term_capacity")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
    Ok(())
}

#[test]
fn duplicate_completed_course_is_a_config_error() {
    let mut raw = RawConfigFile::default();
    raw.courses.completed = vec!["CSC101".into(), "CSC101".into()];

    match ConfigFile::try_from(raw) {
        Err(TermplanError::ConfigError(msg)) => assert!(msg.contains("CSC101")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn unknown_keys_are_a_toml_error() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(file, "[planner]\nterm_capcity = 4\n")?;

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TermplanError::TomlError(_))
    ));
    Ok(())
}

#[test]
fn cli_overrides_config_values() -> TestResult {
    let mut cfg = ConfigFile::default();
    cfg.courses.prerequisites = Some(PathBuf::from("from-config.txt"));
    cfg.courses.completed = vec!["CSC101".into()];

    let args = CliArgs::try_parse_from([
        "termplan",
        "--prereqs",
        "from-cli.txt",
        "--completed",
        "CSC102",
        "--completed",
        "CSC101",
        "--term-capacity",
        "4",
        "plan",
        "CSC201",
    ])?;

    let settings = Settings::resolve(&cfg, &args)?;
    assert_eq!(settings.prerequisites, PathBuf::from("from-cli.txt"));
    assert_eq!(settings.completed, vec!["CSC101", "CSC102"]);
    assert_eq!(settings.term_capacity, 4);
    Ok(())
}

#[test]
fn missing_prerequisite_source_is_reported() -> TestResult {
    let args = CliArgs::try_parse_from(["termplan", "show"])?;
    assert!(matches!(
        Settings::resolve(&ConfigFile::default(), &args),
        Err(TermplanError::ConfigError(_))
    ));
    Ok(())
}

#[test]
fn plan_requires_at_least_one_course() {
    assert!(CliArgs::try_parse_from(["termplan", "plan"]).is_err());
}

#[test]
fn commands_render_their_reports() -> TestResult {
    let catalog = CourseGraphBuilder::new()
        .requires_all("CSC201", &["CSC102", "CSC151"])
        .requires("CSC151", "CSC101")
        .build();
    let planner = TermPlanner::new(catalog.root().clone());

    let plan = Command::Plan {
        courses: vec!["CSC201".into()],
    };
    assert_eq!(
        execute(&plan, &catalog, &planner)?,
        "term 1: CSC101, CSC102\nterm 2: CSC151\nterm 3: CSC201"
    );

    let missing = Command::Missing {
        course: "CSC151".into(),
    };
    assert_eq!(
        execute(&missing, &catalog, &planner)?,
        "CSC151: missing CSC101"
    );

    let bad = Command::Validate {
        terms: vec!["CSC151".into()],
    };
    assert_eq!(execute(&bad, &catalog, &planner)?, "invalid");

    let good = Command::Validate {
        terms: vec!["CSC101, CSC102".into(), "CSC151".into(), "CSC201".into()],
    };
    assert_eq!(execute(&good, &catalog, &planner)?, "valid");

    let show = execute(&Command::Show, &catalog, &planner)?;
    assert!(show.contains("root = CSC201"));
    assert!(show.contains("- CSC101 [completed]"));
    assert!(show.contains("requires: CSC102, CSC151"));
    Ok(())
}

#[test]
fn log_level_flag_beats_env_and_bad_env_falls_back_to_info() {
    use tracing::Level;

    assert_eq!(effective_level(Some(LogLevel::Warn), Some("trace")), Level::WARN);
    assert_eq!(effective_level(None, Some(" Debug ")), Level::DEBUG);
    assert_eq!(effective_level(None, Some("warning")), Level::WARN);
    assert_eq!(effective_level(None, Some("loud")), Level::INFO);
    assert_eq!(effective_level(None, None), Level::INFO);
}
