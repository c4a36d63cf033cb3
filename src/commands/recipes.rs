// src/commands/recipes.rs

//! Recipe listing and inspection

use anyhow::Result;
use levain::{format_general, Pantry};

/// List every recipe with its hydration and sour factor
pub fn cmd_list(pantry: &Pantry) -> Result<()> {
    let recipes = pantry.recipes();
    let width = recipes.names().map(str::len).max().unwrap_or(0);

    println!("{} recipe(s):", recipes.len());
    for recipe in recipes.iter() {
        let mut line = format!(
            "  {:<width$}  hydration {:<6} sour factor {}",
            recipe.name,
            format_general(recipe.hydration),
            format_general(recipe.sour_factor),
            width = width
        );
        if let Some(description) = &recipe.description {
            line.push_str(&format!("  - {}", description));
        }
        println!("{}", line);
    }

    Ok(())
}

/// Show the ratios of one recipe, ingredients in solve order
pub fn cmd_show(pantry: &Pantry, name: &str) -> Result<()> {
    let recipe = pantry.recipe(name)?;

    println!("Recipe: {}", recipe.name);
    if let Some(description) = &recipe.description {
        println!("  {}", description);
    }
    println!("  Hydration: {}", format_general(recipe.hydration));
    println!("  Sour factor: {}", format_general(recipe.sour_factor));

    if recipe.ingredients.is_empty() {
        println!("  Ingredients: starter, flour and water only");
        return Ok(());
    }

    println!("  Ingredients (baker's percentage):");
    for ingredient in &recipe.ingredients {
        let unit = pantry.conversion(&ingredient.name)?;
        println!(
            "    {}: {}% (measured in {})",
            ingredient.name,
            format_general(ingredient.percent * 100.0),
            unit.unit
        );
    }
    println!(
        "  Total: {}% of flour",
        format_general(recipe.total_bakers_percentage() * 100.0)
    );

    Ok(())
}
