// src/planner/simulation.rs

//! Completion ledger for dry-run schedule synthesis.

use std::rc::Rc;

use tracing::debug;

use crate::course::CourseRef;
use crate::errors::Result;
use crate::types::CourseName;

/// Records exactly the courses completed during one synthesis run so they
/// can be reset afterwards.
///
/// Courses the caller completed before the run are never recorded and so
/// never reset. Dropping a `Simulation` rolls it back, which covers early
/// returns on error paths.
#[derive(Debug, Default)]
pub struct Simulation {
    taken: Vec<CourseRef>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete `course` within the simulation and record it.
    ///
    /// Courses that are already completed are left alone and not recorded.
    pub fn take(&mut self, course: &CourseRef) -> Result<()> {
        if course.is_completed() {
            return Ok(());
        }

        course.take()?;
        self.taken.push(Rc::clone(course));
        Ok(())
    }

    /// Names completed so far in this run, in completion order.
    pub fn taken_names(&self) -> Vec<CourseName> {
        self.taken.iter().map(|c| c.name().to_string()).collect()
    }

    /// Reset every recorded course to not completed.
    pub fn rollback(mut self) {
        self.reset_recorded();
    }

    fn reset_recorded(&mut self) {
        if self.taken.is_empty() {
            return;
        }

        debug!(
            count = self.taken.len(),
            "simulation: resetting simulated completions"
        );
        for course in self.taken.drain(..) {
            course.set_completed(false);
        }
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.reset_recorded();
    }
}
