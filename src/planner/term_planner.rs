// src/planner/term_planner.rs

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::course::CourseRef;
use crate::errors::{Result, TermplanError};
use crate::planner::simulation::Simulation;
use crate::planner::term_fill::{fill_term, frontier_intersection};
use crate::types::{schedule_contains_all, CourseName, Schedule, Term};

/// Number of courses per term unless configured otherwise.
pub const DEFAULT_TERM_CAPACITY: usize = 5;

/// Answers schedule queries against a prerequisite graph.
///
/// The planner holds a handle to the root course and never copies the
/// graph. It is responsible for:
/// - checking a user-supplied schedule against prerequisite ordering
///   ([`TermPlanner::is_valid`], which keeps the completions it makes)
/// - synthesising a capacity-bounded schedule for a set of target courses
///   ([`TermPlanner::generate_schedule`], which rolls its completions back)
///
/// Both mutate `completed` flags on the shared graph, so calls against the
/// same graph must not overlap.
#[derive(Debug, Clone)]
pub struct TermPlanner {
    root: CourseRef,
    term_capacity: usize,
}

impl TermPlanner {
    pub fn new(root: CourseRef) -> Self {
        Self {
            root,
            term_capacity: DEFAULT_TERM_CAPACITY,
        }
    }

    /// Override the number of courses allowed per term.
    ///
    /// A capacity of 0 could never schedule anything and is rejected with
    /// [`TermplanError::ConfigError`].
    pub fn with_term_capacity(mut self, term_capacity: usize) -> Result<Self> {
        if term_capacity == 0 {
            return Err(TermplanError::ConfigError(
                "term capacity must be >= 1 (got 0)".to_string(),
            ));
        }
        self.term_capacity = term_capacity;
        Ok(self)
    }

    pub fn root(&self) -> &CourseRef {
        &self.root
    }

    pub fn term_capacity(&self) -> usize {
        self.term_capacity
    }

    /// Locate a course by name with a depth-first search from the root.
    pub fn get_course(&self, name: &str) -> Result<CourseRef> {
        find_course(&self.root, name).ok_or_else(|| TermplanError::CourseNotFound(name.to_string()))
    }

    /// Check `schedule` against prerequisite ordering.
    ///
    /// Terms and the courses inside them are walked in order. Each course
    /// must be known, not yet completed, and takeable at the point it is
    /// reached; it is then completed. The first course that fails ends the
    /// walk with `false`. Completions made along the way are kept, including
    /// those of a valid prefix of a schedule that is later rejected.
    pub fn is_valid(&self, schedule: &[Term]) -> bool {
        for (term_index, term) in schedule.iter().enumerate() {
            for name in term {
                let course = match self.get_course(name) {
                    Ok(course) => course,
                    Err(err) => {
                        warn!(term = term_index + 1, %err, "schedule names an unknown course");
                        return false;
                    }
                };

                if course.is_completed() {
                    debug!(
                        term = term_index + 1,
                        course = %name,
                        "schedule repeats an already completed course"
                    );
                    return false;
                }

                if let Err(err) = course.take() {
                    debug!(term = term_index + 1, %err, "schedule violates prerequisite order");
                    return false;
                }
            }
        }

        true
    }

    /// Build a schedule that eventually contains every course in `selected`.
    ///
    /// Each iteration intersects the must-set of the targets with the
    /// current frontier, packs one term via [`fill_term`], and completes
    /// that term in a [`Simulation`]. Once every target has been scheduled
    /// the simulated completions are rolled back, so the graph is left as it
    /// was found. Targets that were already completed before the call count
    /// as satisfied and are not scheduled again.
    pub fn generate_schedule(&self, selected: &[CourseName]) -> Result<Schedule> {
        let mut schedule: Schedule = Vec::new();
        if selected.is_empty() {
            return Ok(schedule);
        }

        let targets = selected
            .iter()
            .map(|name| self.get_course(name))
            .collect::<Result<Vec<_>>>()?;

        let pending: Vec<CourseName> = targets
            .iter()
            .filter(|course| !course.is_completed())
            .map(|course| course.name().to_string())
            .collect();

        if pending.len() < targets.len() {
            debug!(
                ?pending,
                "some selected courses are already completed; not rescheduling them"
            );
        }

        let mut simulation = Simulation::new();

        while !schedule_contains_all(&schedule, &pending) {
            let must = must_set(&targets);
            let frontier = self.takeable_set();
            let candidates = frontier_intersection(&must, &frontier);
            let term = fill_term(&candidates, &frontier, self.term_capacity);

            if term.is_empty() {
                let remaining = pending
                    .iter()
                    .filter(|name| !schedule.iter().flatten().any(|s| s == *name))
                    .cloned()
                    .collect();
                warn!(?remaining, "no takeable course left to schedule");
                return Err(TermplanError::Stalled { remaining });
            }

            for name in &term {
                let course = self.get_course(name)?;
                simulation.take(&course)?;
            }

            debug!(
                term = schedule.len() + 1,
                courses = ?term,
                must_candidates = candidates.len(),
                frontier = frontier.len(),
                "planned term"
            );
            schedule.push(term);
        }

        debug!(taken = ?simulation.taken_names(), "schedule complete; rolling back");
        simulation.rollback();

        info!(
            selected = ?selected,
            terms = schedule.len(),
            "generated schedule"
        );
        Ok(schedule)
    }

    /// Must-set for the named targets; see [`must_set`].
    pub fn must_set(&self, selected: &[CourseName]) -> Result<Vec<CourseName>> {
        let targets = selected
            .iter()
            .map(|name| self.get_course(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(must_set(&targets))
    }

    /// The current frontier: courses that are takeable and not completed,
    /// found by a depth-first search from the root that stops descending at
    /// the first such course on each path.
    ///
    /// Shared prerequisites can appear more than once.
    pub fn takeable_set(&self) -> Vec<CourseName> {
        let mut frontier = Vec::new();
        collect_takeable(&self.root, &mut frontier);
        frontier
    }
}

/// Each target's own name followed by its missing prerequisites,
/// concatenated across targets. Duplicates are kept.
fn must_set(targets: &[CourseRef]) -> Vec<CourseName> {
    let mut must = Vec::new();
    for course in targets {
        must.push(course.name().to_string());
        must.extend(course.missing_prerequisites());
    }
    must
}

fn collect_takeable(course: &CourseRef, out: &mut Vec<CourseName>) {
    if course.is_takeable() && !course.is_completed() {
        out.push(course.name().to_string());
        return;
    }

    for prerequisite in course.prerequisites() {
        collect_takeable(&prerequisite, out);
    }
}

fn find_course(course: &CourseRef, name: &str) -> Option<CourseRef> {
    if course.name() == name {
        return Some(Rc::clone(course));
    }

    course
        .prerequisites()
        .iter()
        .find_map(|prerequisite| find_course(prerequisite, name))
}
