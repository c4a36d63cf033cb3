// src/recipe/mod.rs

//! Dough recipes
//!
//! A recipe fixes the ratios of a dough; the solver turns those ratios and a
//! target mass into grams.
//!
//! # Terminology
//!
//! - **Hydration**: total water over total flour, counting the water and
//!   flour carried in by the starter
//! - **Sour factor**: fraction of the pre-ferment that is starter once it has
//!   been let down with fresh flour and water; lower means more dilution
//! - **Baker's percentage**: ingredient mass over flour plus
//!   starter-contributed flour, written as a fraction
//!
//! # Example Recipe Book
//!
//! ```toml
//! [bagel]
//! description = "Chewy boiled bagels"
//! hydration = 0.50
//! sour_factor = 0.50
//!
//! [bagel.ingredients]
//! malt = 0.03
//! salt = 0.015
//! ```
//!
//! Ingredients are solved and reported in the order they appear in the file.

mod format;
pub mod parser;

pub use format::{
    BakersPercentage, IngredientList, Recipe, RecipeBook, BASE_COMPONENTS, FLOUR, STARTER, WATER,
};
pub use parser::{parse_recipe_book, parse_recipe_book_file, validate_recipe, validate_recipe_book};
