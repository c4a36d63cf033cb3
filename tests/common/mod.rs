// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use levain::{ConfigPaths, Pantry};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Unit table covering only starter, flour and water
pub const BASE_UNITS: &str = r#"
[starter]
value = 0.005263157894736842
unit = "cups"

[flour]
value = 0.008
unit = "cups"

[water]
value = 0.00423728813559322
unit = "cups"

[salt]
value = 0.3003003003003003
unit = "tsps"
"#;

/// The recipe tables shipped with the repository
pub fn shipped_config_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Pantry loaded from the shipped tables
pub fn shipped_pantry() -> Pantry {
    Pantry::load(&ConfigPaths::in_dir(&shipped_config_dir())).unwrap()
}

/// Write a file into a temp dir and return its path
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Create a config directory with `recipes.toml` and `units.toml`.
///
/// Returns (TempDir, paths) - keep the TempDir alive to prevent cleanup.
pub fn setup_config_dir(recipes: &str, units: &str) -> (TempDir, ConfigPaths) {
    let temp_dir = tempfile::tempdir().unwrap();
    write_file(&temp_dir, "recipes.toml", recipes);
    write_file(&temp_dir, "units.toml", units);
    let paths = ConfigPaths::in_dir(temp_dir.path());
    (temp_dir, paths)
}

/// Assert two values agree within a relative tolerance
pub fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= rel_tol * scale,
        "expected {} within {} of {}",
        actual,
        rel_tol,
        expected
    );
}
