#![allow(dead_code)]

use termplan::course::CourseRef;
use termplan::loader::{build_course_graph, CourseCatalog, PrerequisitePair};
use termplan::planner::TermPlanner;

/// Builder for a course graph, one prerequisite edge at a time.
///
/// Edges are linked in the order they are added, exactly as the loader
/// links lines of a prerequisite file.
#[derive(Debug, Default)]
pub struct CourseGraphBuilder {
    pairs: Vec<PrerequisitePair>,
}

impl CourseGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `course` requires `prerequisite`.
    pub fn requires(mut self, course: &str, prerequisite: &str) -> Self {
        let line = self.pairs.len() + 1;
        self.pairs.push(PrerequisitePair {
            prerequisite: prerequisite.to_string(),
            course: course.to_string(),
            line,
        });
        self
    }

    /// `course` requires each of `prerequisites`, in order.
    pub fn requires_all(mut self, course: &str, prerequisites: &[&str]) -> Self {
        for prerequisite in prerequisites {
            self = self.requires(course, prerequisite);
        }
        self
    }

    pub fn pairs(&self) -> &[PrerequisitePair] {
        &self.pairs
    }

    pub fn build(self) -> CourseCatalog {
        build_course_graph(&self.pairs).expect("Failed to build valid course graph from builder")
    }

    pub fn planner(self) -> (CourseCatalog, TermPlanner) {
        let catalog = self.build();
        let planner = TermPlanner::new(catalog.root().clone());
        (catalog, planner)
    }
}

/// Completion flags of every course, by name, for before/after comparisons.
pub fn completion_snapshot(catalog: &CourseCatalog) -> Vec<(String, bool)> {
    catalog
        .courses()
        .iter()
        .map(|c| (c.name().to_string(), c.is_completed()))
        .collect()
}

/// Look up a course that the test knows exists.
pub fn course(catalog: &CourseCatalog, name: &str) -> CourseRef {
    catalog
        .get(name)
        .cloned()
        .unwrap_or_else(|| panic!("course {name} not in catalog"))
}
