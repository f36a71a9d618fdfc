// src/course/node.rs

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::errors::{Result, TermplanError};
use crate::types::CourseName;

/// Shared handle to a course node.
///
/// Planning is single-threaded and mutates `completed` flags in place, so
/// nodes are reference counted with interior mutability rather than owned by
/// a single parent.
pub type CourseRef = Rc<Course>;

/// One course, its ordered prerequisites, and whether it has been completed.
///
/// Equality is by `name` only. Name uniqueness within a graph is the
/// loader's responsibility.
pub struct Course {
    name: CourseName,
    prerequisites: RefCell<Vec<CourseRef>>,
    completed: Cell<bool>,
}

impl Course {
    /// Create a course with no prerequisites. New courses are not completed.
    pub fn new(name: impl Into<CourseName>) -> CourseRef {
        Rc::new(Self {
            name: name.into(),
            prerequisites: RefCell::new(Vec::new()),
            completed: Cell::new(false),
        })
    }

    /// Create a course and link each of `prerequisites` in order.
    ///
    /// Every link goes through [`Course::add_prerequisite`], so the same
    /// cycle / duplicate-path checks apply.
    pub fn with_prerequisites(
        name: impl Into<CourseName>,
        prerequisites: &[CourseRef],
    ) -> Result<CourseRef> {
        let course = Self::new(name);
        for prerequisite in prerequisites {
            course.add_prerequisite(prerequisite)?;
        }
        Ok(course)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }

    /// Overwrite the completion flag without any takeability check.
    ///
    /// Used to seed a transcript of already-completed courses and to roll
    /// back simulated completions. Prefer [`Course::take`] everywhere else.
    pub fn set_completed(&self, completed: bool) {
        self.completed.set(completed);
    }

    /// Direct prerequisites, in insertion order.
    pub fn prerequisites(&self) -> Vec<CourseRef> {
        self.prerequisites.borrow().clone()
    }

    /// `true` iff every prerequisite, transitively, is completed.
    ///
    /// Equivalent to `self.missing_prerequisites().is_empty()`, without
    /// building the list.
    pub fn is_takeable(&self) -> bool {
        self.prerequisites
            .borrow()
            .iter()
            .all(|p| p.is_completed() && p.is_takeable())
    }

    /// Mark this course completed.
    ///
    /// A no-op if it already is. Fails with [`TermplanError::Untakeable`]
    /// when some prerequisite is still missing. Dependents are not touched.
    pub fn take(&self) -> Result<()> {
        if self.is_completed() {
            return Ok(());
        }

        if !self.is_takeable() {
            return Err(TermplanError::Untakeable {
                course: self.name.clone(),
                missing: self.missing_prerequisites(),
            });
        }

        self.completed.set(true);
        debug!(course = %self.name, "course taken");
        Ok(())
    }

    /// Append `prerequisite` to this course's prerequisites.
    ///
    /// Rejected with [`TermplanError::Prerequisite`] if `prerequisite`
    /// already has this course in its closure (the edge would close a cycle)
    /// or this course already has `prerequisite` in its closure (the edge
    /// would duplicate an existing path). A course is in its own closure, so
    /// self edges are rejected as well.
    pub fn add_prerequisite(&self, prerequisite: &CourseRef) -> Result<()> {
        if prerequisite.closure_contains(self) || self.closure_contains(prerequisite) {
            debug!(
                course = %self.name,
                prerequisite = %prerequisite.name,
                "rejecting prerequisite edge"
            );
            return Err(TermplanError::Prerequisite {
                course: self.name.clone(),
                prerequisite: prerequisite.name.clone(),
            });
        }

        self.prerequisites.borrow_mut().push(Rc::clone(prerequisite));
        Ok(())
    }

    /// Whether `other` is this course or is reachable from it through
    /// prerequisite edges, at any depth.
    pub fn closure_contains(&self, other: &Course) -> bool {
        self == other
            || self
                .prerequisites
                .borrow()
                .iter()
                .any(|p| p.closure_contains(other))
    }

    /// Names of every prerequisite below this course that is not completed,
    /// sorted lexicographically.
    ///
    /// The whole prerequisite graph is walked, including below completed
    /// courses. Shared prerequisites are visited once per incoming edge, so
    /// a course reachable along two paths is listed twice.
    pub fn missing_prerequisites(&self) -> Vec<CourseName> {
        let mut missing = Vec::new();
        self.collect_missing(&mut missing);
        missing.sort();
        missing
    }

    fn collect_missing(&self, out: &mut Vec<CourseName>) {
        for prerequisite in self.prerequisites.borrow().iter() {
            if !prerequisite.is_completed() {
                out.push(prerequisite.name.clone());
            }
            prerequisite.collect_missing(out);
        }
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Course {}

impl fmt::Debug for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prerequisites: Vec<String> = self
            .prerequisites
            .borrow()
            .iter()
            .map(|p| p.name.clone())
            .collect();

        f.debug_struct("Course")
            .field("name", &self.name)
            .field("prerequisites", &prerequisites)
            .field("completed", &self.completed.get())
            .finish()
    }
}
