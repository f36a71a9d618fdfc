// src/loader/catalog.rs

use std::collections::HashMap;
use std::rc::Rc;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use tracing::{debug, warn};

use crate::course::{Course, CourseRef};
use crate::errors::{Result, TermplanError};
use crate::loader::parse::PrerequisitePair;
use crate::types::CourseName;

/// A built course graph: the root plus a by-name index of every course.
///
/// The index is a loader convenience. The planner itself only ever sees the
/// root and reaches everything else through prerequisite edges.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    root: CourseRef,
    courses: Vec<CourseRef>,
    by_name: HashMap<CourseName, CourseRef>,
}

impl CourseCatalog {
    pub fn root(&self) -> &CourseRef {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<&CourseRef> {
        self.by_name.get(name)
    }

    /// All courses in the order they first appear in the prerequisite data.
    pub fn courses(&self) -> &[CourseRef] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Mark a transcript of courses as completed.
    ///
    /// This overrides state directly: a transcript is taken as fact and is
    /// not checked against prerequisite order.
    pub fn mark_completed(&self, names: &[CourseName]) -> Result<()> {
        for name in names {
            let course = self
                .get(name)
                .ok_or_else(|| TermplanError::CourseNotFound(name.clone()))?;
            course.set_completed(true);
            debug!(course = %name, "marked completed from transcript");
        }
        Ok(())
    }
}

/// Link prerequisite pairs into a course graph.
///
/// Courses are created once per distinct name. Before any node is linked
/// the pair set is checked for cycles, and the root is chosen as the one
/// course no other course depends on. Each pair is then linked with
/// [`Course::add_prerequisite`], whose errors are returned unchanged.
pub fn build_course_graph(pairs: &[PrerequisitePair]) -> Result<CourseCatalog> {
    if pairs.is_empty() {
        return Err(TermplanError::ConfigError(
            "prerequisite data must contain at least one `<prerequisite> <course>` pair"
                .to_string(),
        ));
    }

    let root_name = find_root(pairs)?;

    let mut courses: Vec<CourseRef> = Vec::new();
    let mut by_name: HashMap<CourseName, CourseRef> = HashMap::new();

    for pair in pairs {
        let prerequisite = intern(&mut courses, &mut by_name, &pair.prerequisite);
        let course = intern(&mut courses, &mut by_name, &pair.course);

        if let Err(err) = course.add_prerequisite(&prerequisite) {
            warn!(line = pair.line, %err, "rejected prerequisite pair");
            return Err(err);
        }
    }

    let root = by_name
        .get(&root_name)
        .cloned()
        .ok_or_else(|| TermplanError::CourseNotFound(root_name.clone()))?;

    debug!(root = %root_name, courses = courses.len(), "built course graph");

    Ok(CourseCatalog {
        root,
        courses,
        by_name,
    })
}

fn intern(
    courses: &mut Vec<CourseRef>,
    by_name: &mut HashMap<CourseName, CourseRef>,
    name: &str,
) -> CourseRef {
    if let Some(existing) = by_name.get(name) {
        return Rc::clone(existing);
    }

    let course = Course::new(name);
    courses.push(Rc::clone(&course));
    by_name.insert(name.to_string(), Rc::clone(&course));
    course
}

/// Reject cyclic data and return the single top-level course.
///
/// Edge direction: prerequisite -> course. The top-level course is the one
/// node without outgoing edges.
fn find_root(pairs: &[PrerequisitePair]) -> Result<CourseName> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for pair in pairs {
        graph.add_edge(pair.prerequisite.as_str(), pair.course.as_str(), ());
    }

    if let Err(cycle) = toposort(&graph, None) {
        return Err(TermplanError::Cycle(format!(
            "cycle detected in prerequisites involving course '{}'",
            cycle.node_id()
        )));
    }

    let tops: Vec<&str> = graph
        .nodes()
        .filter(|node| {
            graph
                .neighbors_directed(*node, Direction::Outgoing)
                .next()
                .is_none()
        })
        .collect();

    match tops.as_slice() {
        [root] => Ok(root.to_string()),
        _ => Err(TermplanError::ConfigError(format!(
            "prerequisite data must have exactly one top-level course, found {}: {:?}",
            tops.len(),
            tops
        ))),
    }
}
