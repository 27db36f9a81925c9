use super::*;

use approx::assert_relative_eq;

use crate::{
    ErrorKind,
    testing::{Counting, bounds, expr, parabola, tolerance},
};

#[test]
fn finds_maximum_of_parabola() {
    let solution = search_unobserved(
        &parabola(),
        &bounds(0.0, 4.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::default(),
    )
    .expect("search succeeds");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.strategy, Strategy::Dichotomous);
    assert!(solution.interval_length() <= 1e-3);
    assert_relative_eq!(solution.best.x, 2.0, epsilon = 1e-3);
    assert_relative_eq!(solution.best.value, 5.0, epsilon = 1e-6);
}

#[test]
fn finds_minimum() {
    let solution = search_unobserved(
        &expr("(x - 1)^2 + 3"),
        &bounds(-3.0, 4.0),
        &tolerance(1e-5, 1e-4),
        Direction::Min,
        &Config::default(),
    )
    .expect("search succeeds");

    assert_relative_eq!(solution.best.x, 1.0, epsilon = 1e-4);
    assert_relative_eq!(solution.best.value, 3.0, epsilon = 1e-8);
}

#[test]
fn identity_on_unit_interval_takes_ten_iterations() {
    let solution = search_unobserved(
        &expr("x"),
        &bounds(0.0, 1.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::default(),
    )
    .expect("search succeeds");

    let expected_rows = (1.0_f64 / 1e-3).log2().ceil() as usize;
    assert_eq!(expected_rows, 10);
    assert_eq!(solution.records.len(), expected_rows);
    assert_relative_eq!(solution.best.x, 1.0, epsilon = 1e-3);
    assert_relative_eq!(solution.interval[1], 1.0);
}

#[test]
fn records_hold_the_bracket_before_narrowing() {
    let solution = search_unobserved(
        &expr("x"),
        &bounds(0.0, 1.0),
        &tolerance(1e-4, 1e-3),
        Direction::Min,
        &Config::default(),
    )
    .expect("search succeeds");

    let first = &solution.records[0];
    assert_eq!(first.iter, 1);
    assert_relative_eq!(first.low, 0.0);
    assert_relative_eq!(first.high, 1.0);

    let Detail::Dichotomous { mid, left, right } = first.detail else {
        panic!("expected a dichotomous record");
    };
    assert_relative_eq!(mid, 0.5);
    assert_relative_eq!(left.x, 0.5 - 1e-4);
    assert_relative_eq!(right.x, 0.5 + 1e-4);
    assert_relative_eq!(left.value, left.x);

    // Minimizing x keeps the left half every time.
    for (k, record) in solution.records.iter().enumerate() {
        assert_relative_eq!(record.low, 0.0);
        assert_relative_eq!(record.length(), 0.5_f64.powi(k as i32));
    }
}

#[test]
fn makes_two_calls_per_iteration_plus_one() {
    let model = Counting::new(parabola());
    let solution = search_unobserved(
        &model,
        &bounds(0.0, 4.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::default(),
    )
    .expect("search succeeds");

    assert_eq!(model.calls(), 2 * solution.iters() + 1);
    assert_eq!(solution.evaluations, model.calls());
}

#[test]
fn ties_discard_the_left_half_in_both_directions() {
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
        assert_relative_eq!(solution.interval[0], 1.0 - 0.5_f64.powi(10));
        assert_relative_eq!(solution.interval[1], 1.0);
    }
}

#[test]
fn observer_can_stop_early() {
    let mut seen = 0;
    let solution = search(
        &parabola(),
        &bounds(0.0, 4.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::default(),
        |event: &Event<'_>| {
            seen += 1;
            (event.iter() == 3).then_some(Action::StopEarly)
        },
    )
    .expect("search succeeds");

    assert_eq!(seen, 3);
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.records.len(), 3);

    let last = &solution.records[2];
    assert_relative_eq!(solution.interval[0], last.low);
    assert_relative_eq!(solution.interval[1], last.high);
}

#[test]
fn event_best_is_the_preferred_probe() {
    let mut bests = Vec::new();
    search(
        &expr("x"),
        &bounds(0.0, 1.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::default(),
        |event: &Event<'_>| {
            bests.push((event.best, event.record.probes()[1]));
            None
        },
    )
    .expect("search succeeds");

    assert!(bests.iter().all(|(best, right)| best == right));
}

#[test]
fn iteration_cap_is_non_convergence() {
    let err = search_unobserved(
        &expr("x"),
        &bounds(0.0, 1.0),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::new(5).unwrap(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::NonConvergence { iters: 5 }));
    assert_eq!(err.kind(), ErrorKind::NonConvergence);
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
        Error::Evaluation { x, .. } => assert_relative_eq!(x, -1e-4),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_width_interval_evaluates_only_the_midpoint() {
    let model = Counting::new(parabola());
    let solution = search_unobserved(
        &model,
        &bounds(1.5, 1.5),
        &tolerance(1e-4, 1e-3),
        Direction::Max,
        &Config::default(),
    )
    .expect("search succeeds");

    assert!(solution.records.is_empty());
    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.best.x, 1.5);
    assert_relative_eq!(solution.best.value, 4.75);
    assert_eq!(model.calls(), 1);
}
