mod common;

use common::dupe_fixtures;
use predicates::prelude::*;

#[test]
fn default_command_is_list() {
    dupe_fixtures()
        .assert()
        .success()
        .stdout(predicate::str::contains("Routine Catalog"))
        .stdout(predicate::str::contains("filter-double (7 routines, duplicates):"));
}

#[test]
fn list_shows_methods_with_owner() {
    dupe_fixtures()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "NumberProcessor::process_numbers (method, sequence input)",
        ))
        .stdout(predicate::str::contains("Calculator::divide (method, pair input)"));
}

#[test]
fn list_single_family() {
    dupe_fixtures()
        .args(["list", "--family", "fibonacci"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibonacci (2 routines, duplicates):"))
        .stdout(predicate::str::contains("process_data").not());
}

#[test]
fn list_unknown_family_is_usage_error() {
    dupe_fixtures()
        .args(["list", "--family", "sorting"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn list_json() {
    let output = dupe_fixtures()
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let families = parsed.as_array().unwrap();
    assert_eq!(families.len(), 5);
    let total: usize = families
        .iter()
        .map(|f| f["routines"].as_array().unwrap().len())
        .sum();
    assert_eq!(total, 17);
}
