// tests/planner_properties.rs

use proptest::prelude::*;
use termplan::course::{Course, CourseRef};
use termplan::planner::TermPlanner;

struct RandomGraph {
    root: CourseRef,
    courses: Vec<CourseRef>,
}

// Course N may only require courses 0..N-1, which keeps the data acyclic.
// Edges the graph refuses (duplicate paths) are skipped. The root requires
// every course nothing else depends on.
fn build_graph(raw_deps: &[Vec<usize>], taken: &[bool]) -> RandomGraph {
    let courses: Vec<CourseRef> = (0..raw_deps.len())
        .map(|i| Course::new(format!("C{i:02}")))
        .collect();
    let mut has_dependent = vec![false; courses.len()];

    for (i, potential) in raw_deps.iter().enumerate() {
        if i == 0 {
            continue;
        }
        for dep in potential {
            let dep = dep % i;
            if courses[i].add_prerequisite(&courses[dep]).is_ok() {
                has_dependent[dep] = true;
            }
        }
    }

    let root = Course::new("ROOT");
    for (course, depended_on) in courses.iter().zip(&has_dependent) {
        if !depended_on {
            let _ = root.add_prerequisite(course);
        }
    }

    // Only legitimate completions: a course is taken if chosen and takeable.
    for (course, take) in courses.iter().zip(taken) {
        if *take && course.is_takeable() {
            let _ = course.take();
        }
    }

    RandomGraph { root, courses }
}

fn graph_strategy() -> impl Strategy<Value = (Vec<Vec<usize>>, Vec<bool>)> {
    (2..10usize).prop_flat_map(|n| {
        (
            proptest::collection::vec(proptest::collection::vec(any::<usize>(), 0..3), n),
            proptest::collection::vec(any::<bool>(), n),
        )
    })
}

fn snapshot(graph: &RandomGraph) -> Vec<bool> {
    graph
        .courses
        .iter()
        .chain(std::iter::once(&graph.root))
        .map(|c| c.is_completed())
        .collect()
}

fn reset(graph: &RandomGraph, state: &[bool]) {
    for (course, completed) in graph
        .courses
        .iter()
        .chain(std::iter::once(&graph.root))
        .zip(state)
    {
        course.set_completed(*completed);
    }
}

proptest! {
    #[test]
    fn takeable_iff_nothing_missing(
        (deps, taken) in graph_strategy(),
        forced in proptest::collection::vec(any::<bool>(), 0..10),
    ) {
        let graph = build_graph(&deps, &taken);
        for (course, force) in graph.courses.iter().zip(&forced) {
            if *force {
                course.set_completed(true);
            }
        }

        for course in graph.courses.iter().chain(std::iter::once(&graph.root)) {
            let missing = course.missing_prerequisites();
            prop_assert_eq!(course.is_takeable(), missing.is_empty());

            let mut sorted = missing.clone();
            sorted.sort();
            prop_assert_eq!(missing, sorted);
        }
    }

    #[test]
    fn generated_schedules_are_valid_bounded_and_side_effect_free(
        (deps, taken) in graph_strategy(),
        picks in proptest::collection::vec(any::<usize>(), 1..4),
        capacity in 1..=5usize,
    ) {
        let graph = build_graph(&deps, &taken);
        let planner = TermPlanner::new(graph.root.clone())
            .with_term_capacity(capacity)
            .expect("capacity strategy starts at 1");

        let mut selected: Vec<String> = picks
            .iter()
            .map(|p| graph.courses[p % graph.courses.len()].name().to_string())
            .collect();
        selected.dedup();

        let before = snapshot(&graph);
        let schedule = planner.generate_schedule(&selected);
        prop_assert!(schedule.is_ok(), "generation failed: {:?}", schedule);
        let schedule = schedule.unwrap_or_default();

        prop_assert_eq!(snapshot(&graph), before.clone());
        prop_assert!(schedule.iter().all(|term| !term.is_empty() && term.len() <= capacity));

        for name in &selected {
            let already = planner.get_course(name).map(|c| c.is_completed()).unwrap_or(false);
            let scheduled = schedule.iter().flatten().any(|s| s == name);
            prop_assert!(already || scheduled, "{} never scheduled", name);
        }

        prop_assert!(planner.is_valid(&schedule));
        reset(&graph, &before);
    }

    #[test]
    fn empty_selection_changes_nothing((deps, taken) in graph_strategy()) {
        let graph = build_graph(&deps, &taken);
        let planner = TermPlanner::new(graph.root.clone());

        let before = snapshot(&graph);
        let schedule = planner.generate_schedule(&[]);
        prop_assert!(matches!(schedule, Ok(ref s) if s.is_empty()));
        prop_assert_eq!(snapshot(&graph), before);
    }
}
