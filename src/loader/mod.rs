// src/loader/mod.rs

//! Prerequisite data front end.
//!
//! Reads a plain-text list of prerequisite pairs and builds the shared
//! course graph the planner works on:
//!
//! ```text
//! # <prerequisite> <course>
//! CSC101 CSC151
//! CSC151 CSC201
//! CSC102 CSC201
//! ```
//!
//! - [`parse`] turns the text into [`PrerequisitePair`]s.
//! - [`catalog`] links the pairs into [`Course`](crate::course::Course)
//!   nodes and picks the root.

pub mod catalog;
pub mod parse;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::Result;

pub use catalog::{build_course_graph, CourseCatalog};
pub use parse::{parse_prerequisite_pairs, PrerequisitePair};

/// Read prerequisite pairs from `path` and build the course graph.
pub fn load_course_graph(path: impl AsRef<Path>) -> Result<CourseCatalog> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let pairs = parse_prerequisite_pairs(&contents)?;
    let catalog = build_course_graph(&pairs)?;

    info!(
        path = %path.display(),
        courses = catalog.len(),
        root = %catalog.root().name(),
        "loaded prerequisite data"
    );
    Ok(catalog)
}
