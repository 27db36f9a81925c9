use super::*;

use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::{
    IterationRecord,
    testing::{Counting, bounds, expr, parabola, tolerance},
};

use super::bracket::INV_PHI;

fn run_parabola() -> Solution {
    search_unobserved(
        &parabola(),
        &bounds(0.0, 4.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::default(),
    )
    .expect("search succeeds")
}

fn parts(record: &IterationRecord) -> (crate::Point, crate::Point, Evaluated) {
    match record.detail {
        Detail::GoldenSection {
            left,
            right,
            evaluated,
        } => (left, right, evaluated),
        _ => panic!("expected a golden-section record"),
    }
}

#[test]
fn finds_maximum_of_parabola() {
    let solution = run_parabola();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.strategy, Strategy::GoldenSection);
    assert!(solution.interval_length() <= 1e-3);
    assert_relative_eq!(solution.best.x, 2.0, epsilon = 1e-3);
    assert_relative_eq!(solution.best.value, 5.0, epsilon = 1e-6);
}

#[test]
fn finds_minimum_of_cosine() {
    let solution = search_unobserved(
        &expr("cos(x)"),
        &bounds(2.0, 4.0),
        &tolerance(1e-6, 1e-5),
        Direction::Min,
        &Config::default(),
    )
    .expect("search succeeds");

    assert_relative_eq!(solution.best.x, PI, epsilon = 1e-5);
    assert_relative_eq!(solution.best.value, -1.0, epsilon = 1e-9);
}

#[test]
fn first_iteration_places_points_at_golden_offsets() {
    let solution = run_parabola();
    let first = &solution.records[0];
    let (left, right, evaluated) = parts(first);

    assert_eq!(evaluated, Evaluated::Both);
    assert_relative_eq!(left.x, 4.0 - INV_PHI * 4.0);
    assert_relative_eq!(right.x, INV_PHI * 4.0);
}

#[test]
fn evaluates_one_new_point_per_iteration_after_the_first() {
    let model = Counting::new(parabola());
    let solution = search_unobserved(
        &model,
        &bounds(0.0, 4.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::default(),
    )
    .expect("search succeeds");

    let iters = solution.iters();
    assert!(iters > 10);

    // Two points up front, one per later iteration, one at the midpoint.
    assert_eq!(model.calls(), 2 + (iters - 1) + 1);
    assert_eq!(solution.evaluations, model.calls());

    let recorded: usize = solution.records.iter().map(IterationRecord::evaluations).sum();
    assert_eq!(recorded + 1, model.calls());
    assert!(
        solution.records[1..]
            .iter()
            .all(|r| parts(r).2 != Evaluated::Both)
    );
}

#[test]
fn carried_point_is_reused_exactly() {
    let solution = run_parabola();

    for pair in solution.records.windows(2) {
        let (prev_left, prev_right, _) = parts(&pair[0]);
        let (left, right, evaluated) = parts(&pair[1]);
        match evaluated {
            Evaluated::Right => assert_eq!(left, prev_right),
            Evaluated::Left => assert_eq!(right, prev_left),
            Evaluated::Both => panic!("only the first iteration evaluates both points"),
        }
    }
}

#[test]
fn bracket_shrinks_by_the_inverse_golden_ratio() {
    let solution = run_parabola();

    for pair in solution.records.windows(2) {
        let ratio = pair[1].length() / pair[0].length();
        assert_relative_eq!(ratio, INV_PHI, epsilon = 1e-9);
    }
}

#[test]
fn ties_discard_the_left_part_in_both_directions() {
    for direction in [Direction::Max, Direction::Min] {
        let solution = search_unobserved(
            &expr("3"),
            &bounds(0.0, 1.0),
            &tolerance(1e-4, 1e-3),
            direction,
            &Config::default(),
        )
        .expect("search succeeds");

        assert!(solution.records.iter().all(|r| r.high == 1.0));
        assert_relative_eq!(solution.interval[1], 1.0);
        assert!(solution.interval[0] > 0.99);
    }
}

#[test]
fn observer_can_stop_early() {
    let model = Counting::new(parabola());
    let solution = search(
        &model,
        &bounds(0.0, 4.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::default(),
        |event: &Event<'_>| (event.iter() == 2).then_some(Action::StopEarly),
    )
    .expect("search succeeds");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.records.len(), 2);
    assert_eq!(model.calls(), 4);

    let last = &solution.records[1];
    assert_relative_eq!(solution.interval[0], last.low);
    assert_relative_eq!(solution.interval[1], last.high);
}

#[test]
fn iteration_cap_is_non_convergence() {
    let err = search_unobserved(
        &parabola(),
        &bounds(0.0, 4.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::new(3).unwrap(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::NonConvergence { iters: 3 }));
}

#[test]
fn objective_failure_stops_the_search() {
    let err = search_unobserved(
        &expr("ln(x)"),
        &bounds(-1.0, 1.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::default(),
    )
    .unwrap_err();

    match err {
        Error::Evaluation { x, .. } => assert_relative_eq!(x, 1.0 - 2.0 * INV_PHI),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_width_interval_evaluates_only_the_midpoint() {
    let model = Counting::new(parabola());
    let solution = search_unobserved(
        &model,
        &bounds(3.0, 3.0),
        &tolerance(1e-4, 1e-3),
        Direction::Min,
        &Config::default(),
    )
    .expect("search succeeds");

    assert!(solution.records.is_empty());
    assert_relative_eq!(solution.best.x, 3.0);
    assert_relative_eq!(solution.best.value, 4.0);
    assert_eq!(solution.evaluations, 1);
}
