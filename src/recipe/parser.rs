// src/recipe/parser.rs

//! Recipe book parsing and validation

use crate::config::{read_config_file, ConfigError, ConfigFormat};
use crate::recipe::format::{Recipe, RecipeBook, BASE_COMPONENTS};
use std::path::Path;
use tracing::{info, warn};

/// Parse a recipe book from a string and validate every recipe
pub fn parse_recipe_book(content: &str, format: ConfigFormat) -> Result<RecipeBook, ConfigError> {
    let book: RecipeBook = format.deserialize(content, "recipe book")?;
    validate_recipe_book(&book)?;
    Ok(book)
}

/// Parse a recipe book from a `.toml` or `.json` file
pub fn parse_recipe_book_file(path: &Path) -> Result<RecipeBook, ConfigError> {
    let book: RecipeBook = read_config_file(path)?;
    validate_recipe_book(&book)?;
    info!("Loaded {} recipe(s) from {}", book.len(), path.display());
    Ok(book)
}

/// Validate all recipes, logging any warnings
pub fn validate_recipe_book(book: &RecipeBook) -> Result<(), ConfigError> {
    if book.is_empty() {
        return Err(ConfigError::EmptyRecipeBook);
    }

    for recipe in book.iter() {
        for warning in validate_recipe(recipe)? {
            warn!("Recipe '{}': {}", recipe.name, warning);
        }
    }

    Ok(())
}

/// Validate a recipe for correctness
///
/// Hard errors make the mass balance meaningless; warnings flag values that
/// solve but are unusual for a dough.
pub fn validate_recipe(recipe: &Recipe) -> Result<Vec<String>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidRecipe {
        recipe: recipe.name.clone(),
        reason,
    };
    let mut warnings = Vec::new();

    if recipe.name.trim().is_empty() {
        return Err(invalid("recipe name cannot be empty".to_string()));
    }

    if !recipe.hydration.is_finite() || recipe.hydration <= 0.0 {
        return Err(invalid(format!(
            "hydration must be greater than 0, got {}",
            recipe.hydration
        )));
    }

    if !recipe.sour_factor.is_finite() || recipe.sour_factor <= 0.0 || recipe.sour_factor > 1.0 {
        return Err(invalid(format!(
            "sour_factor must be in (0, 1], got {}",
            recipe.sour_factor
        )));
    }

    for ingredient in &recipe.ingredients {
        if ingredient.name.trim().is_empty() {
            return Err(invalid("ingredient name cannot be empty".to_string()));
        }
        if BASE_COMPONENTS.contains(&ingredient.name.as_str()) {
            return Err(invalid(format!(
                "'{}' is computed by the solver and cannot be listed as an ingredient",
                ingredient.name
            )));
        }
        if !ingredient.percent.is_finite() || ingredient.percent < 0.0 {
            return Err(invalid(format!(
                "baker's percentage for '{}' must be >= 0, got {}",
                ingredient.name, ingredient.percent
            )));
        }
        if ingredient.percent >= 1.0 {
            warnings.push(format!(
                "'{}' is {} of the flour; baker's percentages are fractions (0.02 = 2%)",
                ingredient.name, ingredient.percent
            ));
        }
    }

    if recipe.hydration >= 2.0 {
        warnings.push(format!("hydration {} is unusually high", recipe.hydration));
    }
    if recipe.sour_factor == 1.0 {
        warnings.push("sour_factor 1.0 leaves no fresh flour or water".to_string());
    }

    Ok(warnings)
}
