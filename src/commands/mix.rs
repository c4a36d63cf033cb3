// src/commands/mix.rs

//! Mix command - solve a recipe for a target dough mass

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use levain::{MixReport, Pantry};
use tracing::info;

/// Print the ingredient masses for `recipe` at `total_mass` grams
///
/// # Arguments
/// * `pantry` - Loaded recipes and unit conversions
/// * `total_mass` - Mass of the finished dough in grams
/// * `starter_hydration` - Water over flour in the starter
/// * `recipe` - Recipe name
/// * `format` - Text lines or JSON
pub fn cmd_mix(
    pantry: &Pantry,
    total_mass: f64,
    starter_hydration: f64,
    recipe: &str,
    format: OutputFormat,
) -> Result<()> {
    info!(
        "Mixing {} g of '{}' with starter hydration {}",
        total_mass, recipe, starter_hydration
    );

    let formula = pantry
        .mix(recipe, total_mass, starter_hydration)
        .with_context(|| format!("Cannot mix '{}'", recipe))?;
    let report = MixReport::new(&formula, pantry.units())?;

    match format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
