//! Command-line integration tests.
//!
//! These tests spawn the actual `kiwi` binary with an isolated secrets file
//! and check what it prints and how it exits.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

const PASSWORD: &str = "te-puke";

/// Run `kiwi` with `args` against a fresh secrets file and config home.
fn kiwi(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let secrets = temp_dir.path().join("secrets.toml");
    fs::write(&secrets, format!("[auth]\npassword = \"{}\"\n", PASSWORD))
        .expect("Failed to write secrets");

    Command::new(env!("CARGO_BIN_EXE_kiwi"))
        .arg("--secrets")
        .arg(&secrets)
        .args(args)
        .current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .env("HOME", temp_dir.path())
        .env("RUST_LOG", "off")
        .env_remove("KIWI_AUTH__PASSWORD")
        .output()
        .expect("Failed to run kiwi")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn flowers_prints_the_reference_result() {
    let output = kiwi(&["flowers", "--password", PASSWORD, "--accept-disclaimer"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Disclaimer accepted. Welcome!"));
    assert!(out.contains("To reach your target of 10.0 tons/ha,"));
    assert!(out.contains("You need to leave 10.52 flowers per cane."));
}

#[test]
fn revenue_prints_yield_and_revenue_lines() {
    let output = kiwi(&[
        "revenue",
        "--password",
        PASSWORD,
        "--accept-disclaimer",
        "--num-trees",
        "666",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Estimated Yield: 7,672.32 kg"));
    assert!(out.contains("Total Revenue: R460,339.20"));
    assert!(out.contains("Revenue per Tree: R691.20"));
}

#[test]
fn wrong_password_exits_with_an_error() {
    let output = kiwi(&["flowers", "--password", "Te-Puke", "--accept-disclaimer"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Incorrect password. Try again."));
    assert!(!stdout(&output).contains("flowers per cane"));
}

#[test]
fn missing_password_exits_with_the_prompt() {
    let output = kiwi(&["revenue", "--accept-disclaimer"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Please enter your password to access the program."));
}

#[test]
fn estimate_needs_the_disclaimer_flag() {
    let output = kiwi(&["flowers", "--password", PASSWORD]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Disclaimer & Assumptions"));
    assert!(err.contains("You must accept the disclaimer before using the tool."));
    assert!(stdout(&output).is_empty());
}

#[test]
fn input_below_minimum_exits_with_an_error() {
    let output = kiwi(&[
        "flowers",
        "--password",
        PASSWORD,
        "--accept-disclaimer",
        "--fruit-weight",
        "0.5",
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("fruit_weight_g must be at least 1"));
}
