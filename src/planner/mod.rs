// src/planner/mod.rs

//! Schedule validation and synthesis over a course graph.
//!
//! - [`term_planner`] holds [`TermPlanner`], the entry point for
//!   `is_valid` and `generate_schedule`.
//! - [`term_fill`] contains the pure must-set / frontier intersection and
//!   term packing steps.
//! - [`simulation`] records the completions made while synthesising a
//!   schedule and rolls them back afterwards.

pub mod simulation;
pub mod term_fill;
pub mod term_planner;

pub use simulation::Simulation;
pub use term_fill::{fill_term, frontier_intersection};
pub use term_planner::{TermPlanner, DEFAULT_TERM_CAPACITY};
