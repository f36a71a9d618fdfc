// src/planner/term_fill.rs

//! Pure term-packing helpers.
//!
//! Neither function touches the graph: they work on the must-set and the
//! frontier that [`TermPlanner`](crate::planner::TermPlanner) computed for the
//! current iteration, so term composition can be tested in isolation.

use crate::types::{CourseName, Term};

/// Entries of `must` that are also in `frontier`, compared by value,
/// deduplicated, in `must` order.
pub fn frontier_intersection(must: &[CourseName], frontier: &[CourseName]) -> Vec<CourseName> {
    let mut candidates: Vec<CourseName> = Vec::new();

    for name in must {
        if frontier.contains(name) && !candidates.contains(name) {
            candidates.push(name.clone());
        }
    }

    candidates
}

/// Pack one term of at most `capacity` courses.
///
/// - More than `capacity` candidates: the first `capacity` are used and the
///   rest wait for a later term.
/// - Exactly `capacity`: used unchanged.
/// - Fewer: all candidates, then backfilled from `frontier` walking from its
///   end, skipping names already in the term, until the term is full or the
///   frontier is exhausted.
pub fn fill_term(candidates: &[CourseName], frontier: &[CourseName], capacity: usize) -> Term {
    if candidates.len() >= capacity {
        return candidates[..capacity].to_vec();
    }

    let mut term = candidates.to_vec();
    for name in frontier.iter().rev() {
        if term.len() >= capacity {
            break;
        }
        if !term.contains(name) {
            term.push(name.clone());
        }
    }

    term
}
