// src/pantry.rs

//! Loaded recipe book and unit table
//!
//! Both tables are read once, validated against each other and then only
//! read. Every ingredient of every recipe must have a unit conversion, so a
//! solved formula can always be rendered.

use crate::config::{ConfigError, ConfigPaths};
use crate::error::{Error, Result};
use crate::formula::DoughFormula;
use crate::recipe::{parse_recipe_book_file, validate_recipe_book, Recipe, RecipeBook};
use crate::solver::MassSolver;
use crate::units::{parse_conversion_table_file, validate_conversion_table, ConversionEntry, ConversionTable};
use tracing::info;

/// Immutable lookup of recipes and unit conversions
#[derive(Debug, Clone)]
pub struct Pantry {
    recipes: RecipeBook,
    units: ConversionTable,
}

impl Pantry {
    /// Validate both tables and check that every recipe ingredient converts
    pub fn new(recipes: RecipeBook, units: ConversionTable) -> std::result::Result<Self, ConfigError> {
        validate_recipe_book(&recipes)?;
        validate_conversion_table(&units)?;
        Self::link(recipes, units)
    }

    /// Pair already validated tables, requiring a conversion for every ingredient
    fn link(recipes: RecipeBook, units: ConversionTable) -> std::result::Result<Self, ConfigError> {
        for recipe in recipes.iter() {
            for name in recipe.ingredients.names() {
                if !units.contains(name) {
                    return Err(ConfigError::MissingConversion {
                        ingredient: name.to_string(),
                        needed_by: format!("recipe '{}'", recipe.name),
                    });
                }
            }
        }

        Ok(Self { recipes, units })
    }

    /// Load from resolved file locations
    pub fn load(paths: &ConfigPaths) -> std::result::Result<Self, ConfigError> {
        let recipes = parse_recipe_book_file(&paths.recipes)?;
        let units = parse_conversion_table_file(&paths.units)?;
        let pantry = Self::link(recipes, units)?;
        info!(
            "Pantry holds {} recipe(s) and {} unit conversion(s)",
            pantry.recipes.len(),
            pantry.units.len()
        );
        Ok(pantry)
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn units(&self) -> &ConversionTable {
        &self.units
    }

    /// Look up a recipe by name
    pub fn recipe(&self, name: &str) -> Result<&Recipe> {
        self.recipes.get(name).ok_or_else(|| Error::UnknownRecipe {
            name: name.to_string(),
            available: self.recipes.names().collect::<Vec<_>>().join(", "),
        })
    }

    /// Look up the unit conversion for an ingredient
    pub fn conversion(&self, name: &str) -> Result<&ConversionEntry> {
        self.units
            .get(name)
            .ok_or_else(|| Error::MissingConversion(name.to_string()))
    }

    /// Solve the named recipe for a dough of `total_mass` grams
    pub fn mix(&self, recipe: &str, total_mass: f64, starter_hydration: f64) -> Result<DoughFormula> {
        let recipe = self.recipe(recipe)?;
        Ok(MassSolver::new().solve(total_mass, starter_hydration, recipe)?)
    }
}
