mod common;

use common::dupe_fixtures;
use predicates::prelude::*;

#[test]
fn run_filter_and_double() {
    dupe_fixtures()
        .args(["run", "filter_and_double", "1", "-2", "3", "0"])
        .assert()
        .success()
        .stdout("filter_and_double(1, -2, 3, 0) = [2, 6]\n");
}

#[test]
fn run_method_variant() {
    dupe_fixtures()
        .args(["run", "DataProcessor::transform", "-5", "5"])
        .assert()
        .success()
        .stdout("DataProcessor::transform(-5, 5) = [10]\n");
}

#[test]
fn run_sum_of_nothing() {
    dupe_fixtures()
        .args(["run", "calculate_sum"])
        .assert()
        .success()
        .stdout("calculate_sum() = 0\n");
}

#[test]
fn run_factorial_and_fibonacci() {
    dupe_fixtures()
        .args(["run", "MathUtils::factorial", "5"])
        .assert()
        .success()
        .stdout("MathUtils::factorial(5) = 120\n");
    dupe_fixtures()
        .args(["run", "calculate_fibonacci", "10"])
        .assert()
        .success()
        .stdout("calculate_fibonacci(10) = 55\n");
}

#[test]
fn run_negative_factorial_hits_base_case() {
    dupe_fixtures()
        .args(["run", "calculate_factorial", "-3"])
        .assert()
        .success()
        .stdout("calculate_factorial(-3) = 1\n");
}

#[test]
fn run_divide() {
    dupe_fixtures()
        .args(["run", "Calculator::divide", "10", "2"])
        .assert()
        .success()
        .stdout("Calculator::divide(10, 2) = 5\n");
}

#[test]
fn run_divide_by_zero() {
    dupe_fixtures()
        .args(["run", "Calculator::divide", "10", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Invalid argument: Cannot divide by zero",
        ));
}

#[test]
fn run_factorial_overflow() {
    dupe_fixtures()
        .args(["run", "calculate_factorial", "40"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Arithmetic overflow"));
}

#[test]
fn run_unknown_routine() {
    dupe_fixtures()
        .args(["run", "quick_sort", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown routine: quick_sort"));
}

#[test]
fn run_wrong_arity() {
    dupe_fixtures()
        .args(["run", "Calculator::add", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected exactly two numbers"));
}

#[test]
fn run_fibonacci_above_limit() {
    dupe_fixtures()
        .args(["--fibonacci-limit", "5", "run", "MathUtils::fibonacci", "6"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "MathUtils::fibonacci(6) exceeds the configured limit of 5",
        ));
}

#[test]
fn run_json() {
    let output = dupe_fixtures()
        .args(["--format", "json", "run", "DataHelper::sum", "1", "2", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["routine"], "DataHelper::sum");
    assert_eq!(parsed["family"], "sum");
    assert_eq!(parsed["input"], serde_json::json!([1, 2, 3]));
    assert_eq!(parsed["output"], 6);
}

#[test]
fn run_sum_past_i64_max() {
    dupe_fixtures()
        .args(["run", "calculate_sum", "9223372036854775807", "1"])
        .assert()
        .success()
        .stdout("calculate_sum(9223372036854775807, 1) = 9223372036854775808\n");
}

#[test]
fn run_filter_double_past_i64_max() {
    dupe_fixtures()
        .args(["run", "process_data", "5000000000000000000", "-9223372036854775808"])
        .assert()
        .success()
        .stdout(
            "process_data(5000000000000000000, -9223372036854775808) = [10000000000000000000]\n",
        );
}

#[test]
fn run_huge_factorial_is_overflow_error() {
    for routine in ["calculate_factorial", "MathUtils::factorial"] {
        dupe_fixtures()
            .args(["run", routine, "10000000"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Arithmetic overflow"));
    }
}

#[test]
fn run_huge_fibonacci_limit_still_reports_overflow() {
    dupe_fixtures()
        .args(["--fibonacci-limit", "4000000000", "run", "calculate_fibonacci", "10000000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Arithmetic overflow"));
}
