// tests/cli.rs

//! End-to-end tests running the levain binary against the shipped tables.

mod common;

use common::{setup_config_dir, shipped_config_dir, BASE_UNITS};
use std::path::Path;
use std::process::{Command, Output};

fn levain(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_levain"))
        .arg("--config-dir")
        .arg(config_dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run levain")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_mix_overnight_text() {
    let output = levain(&shipped_config_dir(), &["mix", "1000", "1.0", "overnight"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "overnight (1000 grams, starter hydration 1):",
            "  starter: 118.944 grams (0.626023 cups)",
            "  flour: 527.038 grams (4.2163 cups)",
            "  water: 345.22 grams (1.4628 cups)",
            "  salt: 8.79765 grams (2.64194 tsps)",
        ]
    );
}

#[test]
fn test_mix_json() {
    let output = levain(
        &shipped_config_dir(),
        &["mix", "1000", "1.0", "sweet", "--format", "json"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["recipe"], "sweet");

    let names: Vec<&str> = report["ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["starter", "flour", "water", "egg", "sugar", "butter", "salt"]);

    let total: f64 = report["ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line["grams"].as_f64().unwrap())
        .sum();
    assert!((total - 1000.0).abs() < 1e-6);
}

#[test]
fn test_mix_unknown_recipe() {
    let output = levain(&shipped_config_dir(), &["mix", "1000", "1.0", "rye"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());

    let err = stderr(&output);
    assert!(err.contains("Unknown recipe 'rye'"), "stderr: {}", err);
    assert!(err.contains("overnight"));
}

#[test]
fn test_mix_negative_mass() {
    let output = levain(&shipped_config_dir(), &["mix", "-5", "1.0", "sour"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("positive"));
}

#[test]
fn test_mix_non_numeric_mass() {
    let output = levain(&shipped_config_dir(), &["mix", "lots", "1.0", "sour"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_list() {
    let output = levain(&shipped_config_dir(), &["list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("4 recipe(s):"));
    let bagel = text.find("bagel").unwrap();
    let sweet = text.find("sweet").unwrap();
    assert!(bagel < sweet);
}

#[test]
fn test_show() {
    let output = levain(&shipped_config_dir(), &["show", "overnight"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Recipe: overnight"));
    assert!(text.contains("Hydration: 0.69"));
    assert!(text.contains("salt: 1.5% (measured in tsps)"));
}

#[test]
fn test_broken_config_dir() {
    let (dir, _paths) = setup_config_dir("[sour]\nhydration = -0.5\nsour_factor = 0.5\n", BASE_UNITS);
    let output = levain(dir.path(), &["list"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("sour"));
}

#[test]
fn test_completions() {
    let output = levain(&shipped_config_dir(), &["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("levain"));
}
