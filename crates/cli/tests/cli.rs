use assert_cmd::Command;
use predicates::prelude::*;

fn extremum() -> Command {
    let mut cmd = Command::cargo_bin("extremum").expect("binary is built");
    cmd.env_remove("RUST_LOG")
        .env_remove("EXTREMUM_EPSILON")
        .env_remove("EXTREMUM_MIN_LENGTH")
        .env_remove("EXTREMUM_MAX_ITERS");
    cmd
}

#[test]
fn prints_a_table_per_strategy() {
    extremum()
        .args(["--expr", "-(x - 2)^2 + 5", "--lower", "0", "--upper", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dichotomous search (max)"))
        .stdout(predicate::str::contains("golden-section search (max)"))
        .stdout(predicate::str::contains("fibonacci search (max)"))
        .stdout(predicate::str::contains("best f(x)"));
}

#[test]
fn json_output_is_an_array_of_solutions() {
    let output = extremum()
        .args(["-e", "cos(x)", "-l", "2", "-u", "4", "-d", "min"])
        .args(["-s", "golden", "-s", "fibonacci", "--format", "json"])
        .output()
        .expect("command runs");

    assert!(output.status.success());
    let solutions: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let solutions = solutions.as_array().expect("an array");

    assert_eq!(solutions.len(), 2);
    assert_eq!(solutions[0]["strategy"], "golden_section");
    assert_eq!(solutions[1]["strategy"], "fibonacci");
    assert_eq!(solutions[0]["direction"], "min");
    assert_eq!(solutions[0]["status"], "converged");

    let best_x = solutions[0]["best"]["x"].as_f64().expect("numeric x");
    assert!((best_x - std::f64::consts::PI).abs() < 1e-3);
}

#[test]
fn negative_bounds_are_accepted() {
    extremum()
        .args(["-e", "x^2", "-l", "-3", "-u", "-1", "-d", "min", "-s", "dichotomous"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dichotomous search (min)"));
}

#[test]
fn parameter_errors_exit_non_zero() {
    extremum()
        .args(["-e", "x", "-l", "0", "-u", "1"])
        .args(["--epsilon", "0.01", "--min-length", "0.01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid search parameters"))
        .stderr(predicate::str::contains("3 of 3 searches failed"));
}

#[test]
fn malformed_expression_exits_non_zero() {
    extremum()
        .args(["-e", "x +", "-l", "0", "-u", "1", "-s", "golden"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid expression"));
}

#[test]
fn stop_after_limits_the_trace() {
    let output = extremum()
        .args(["-e", "x", "-l", "0", "-u", "1", "-s", "dichotomous"])
        .args(["--stop-after", "2", "--format", "json"])
        .output()
        .expect("command runs");

    assert!(output.status.success());
    let solutions: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");

    assert_eq!(solutions[0]["status"], "stopped_by_observer");
    assert_eq!(solutions[0]["records"].as_array().map(Vec::len), Some(2));
}

#[test]
fn deeply_nested_expression_fails_cleanly() {
    let expr = format!("{}x{}", "(".repeat(5_000), ")".repeat(5_000));
    extremum()
        .args(["-e", &expr, "-l", "0", "-u", "1", "-s", "golden"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nests too deeply"));
}
