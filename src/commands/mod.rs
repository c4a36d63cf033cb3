// src/commands/mod.rs
//! Command handlers for the levain CLI

mod mix;
mod recipes;

pub use mix::cmd_mix;
pub use recipes::{cmd_list, cmd_show};

use anyhow::{Context, Result};
use levain::{ConfigPaths, Pantry};
use std::path::Path;

/// Resolve configuration locations and load the pantry
pub fn open_pantry(config_dir: Option<&Path>, recipes: Option<&Path>, units: Option<&Path>) -> Result<Pantry> {
    let paths = ConfigPaths::resolve(config_dir, recipes, units);
    Pantry::load(&paths).with_context(|| {
        format!(
            "Failed to load recipes from {} and units from {}",
            paths.recipes.display(),
            paths.units.display()
        )
    })
}
