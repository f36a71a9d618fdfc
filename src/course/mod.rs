// src/course/mod.rs

//! Prerequisite graph.
//!
//! - [`node`] holds the [`Course`] node type: its prerequisite links, the
//!   mutable `completed` flag, and the reachability queries built on them.
//!
//! The graph is a DAG of shared nodes. A course may be the prerequisite of
//! several others, so nodes are held through [`CourseRef`] handles and the
//! same underlying node is reached from every dependent.

pub mod node;

pub use node::{Course, CourseRef};
