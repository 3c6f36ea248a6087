//! These tests are mostly here just to ensure that invalid arguments are
//! caught before the terminal gets taken over.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_no_files() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("tabsort")?
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
    Ok(())
}

#[test]
fn test_invalid_delimiter() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("tabsort")?
        .args(["-d", "ab", "whatever.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The delimiter must be a single (one-byte) character.",
        ));
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("tabsort")?
        .arg("/definitely/not/here.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to"));
    Ok(())
}
