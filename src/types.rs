// src/types.rs

//! Plain value types shared between the planner, the loader and the CLI.

/// A course identifier. Compared by value everywhere.
pub type CourseName = String;

/// One scheduling period: an ordered list of course names.
pub type Term = Vec<CourseName>;

/// An ordered sequence of terms.
pub type Schedule = Vec<Term>;

/// Parse a comma-separated term such as `"CSC101, MAT101"`.
///
/// Blank entries are dropped, so `"A,,B"` and `"A, B,"` both yield `["A", "B"]`.
pub fn parse_term(s: &str) -> Term {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether every name in `selected` appears somewhere in `schedule`.
pub fn schedule_contains_all(schedule: &[Term], selected: &[CourseName]) -> bool {
    selected
        .iter()
        .all(|name| schedule.iter().flatten().any(|scheduled| scheduled == name))
}

/// Render a schedule one term per line, e.g. `term 1: CSC101, MAT101`.
pub fn format_schedule(schedule: &[Term]) -> String {
    schedule
        .iter()
        .enumerate()
        .map(|(i, term)| format!("term {}: {}", i + 1, term.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}
