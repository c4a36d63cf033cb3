// src/recipe/format.rs

//! Recipe file format definitions
//!
//! A recipe book is a table keyed by recipe name. Each recipe gives the
//! dough hydration, the sour factor and the baker's percentage of every
//! ingredient other than starter, flour and water.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Starter culture, always row/column 0 of the mass balance
pub const STARTER: &str = "starter";
/// Fresh flour, always row/column 1
pub const FLOUR: &str = "flour";
/// Fresh water, always row/column 2
pub const WATER: &str = "water";

/// Components present in every dough, in solve order
pub const BASE_COMPONENTS: [&str; 3] = [STARTER, FLOUR, WATER];

/// One named ingredient and its baker's percentage (as a fraction, 0.015 = 1.5%)
#[derive(Debug, Clone, PartialEq)]
pub struct BakersPercentage {
    pub name: String,
    pub percent: f64,
}

/// Ingredients in the order they are solved and reported
///
/// Deserialized from a map, keeping document order. Duplicate names are
/// rejected while decoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientList(Vec<BakersPercentage>);

impl IngredientList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an ingredient; returns false (and leaves the list unchanged)
    /// if the name is already present
    pub fn push(&mut self, name: impl Into<String>, percent: f64) -> bool {
        let name = name.into();
        if self.get(&name).is_some() {
            return false;
        }
        self.0.push(BakersPercentage { name, percent });
        true
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|i| i.name == name).map(|i| i.percent)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BakersPercentage> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|i| i.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a BakersPercentage;
    type IntoIter = std::slice::Iter<'a, BakersPercentage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for IngredientList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for ingredient in &self.0 {
            map.serialize_entry(&ingredient.name, &ingredient.percent)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IngredientList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IngredientVisitor;

        impl<'de> Visitor<'de> for IngredientVisitor {
            type Value = IngredientList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of ingredient names to baker's percentages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut list = IngredientList::new();
                while let Some((name, percent)) = access.next_entry::<String, f64>()? {
                    if !list.push(name.clone(), percent) {
                        return Err(de::Error::custom(format!("duplicate ingredient '{}'", name)));
                    }
                }
                Ok(list)
            }
        }

        deserializer.deserialize_map(IngredientVisitor)
    }
}

/// A dough recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    /// Key of this recipe in the book (filled in after loading)
    #[serde(skip)]
    pub name: String,

    /// Free-form description shown by `levain list`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Total water over total flour in the finished dough
    pub hydration: f64,

    /// How far the starter is let down with fresh flour and water (0, 1]
    pub sour_factor: f64,

    /// Named ingredients with baker's percentages, in solve order
    #[serde(default)]
    pub ingredients: IngredientList,
}

impl Recipe {
    /// Create a recipe with no named ingredients
    pub fn new(name: impl Into<String>, hydration: f64, sour_factor: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            hydration,
            sour_factor,
            ingredients: IngredientList::new(),
        }
    }

    /// Builder-style ingredient append (duplicates are ignored)
    pub fn with_ingredient(mut self, name: impl Into<String>, percent: f64) -> Self {
        self.ingredients.push(name, percent);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Every component in solve order: starter, flour, water, then the
    /// named ingredients
    pub fn component_names(&self) -> Vec<&str> {
        BASE_COMPONENTS
            .iter()
            .copied()
            .chain(self.ingredients.names())
            .collect()
    }

    /// Size of the linear system for this recipe
    pub fn component_count(&self) -> usize {
        BASE_COMPONENTS.len() + self.ingredients.len()
    }

    /// Sum of all baker's percentages
    pub fn total_bakers_percentage(&self) -> f64 {
        self.ingredients.iter().map(|i| i.percent).sum()
    }
}

/// All recipes, keyed and listed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecipeBook {
    recipes: BTreeMap<String, Recipe>,
}

impl<'de> Deserialize<'de> for RecipeBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut recipes = BTreeMap::<String, Recipe>::deserialize(deserializer)?;
        for (name, recipe) in recipes.iter_mut() {
            recipe.name = name.clone();
        }
        Ok(Self { recipes })
    }
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a recipe under its own name
    pub fn insert(&mut self, recipe: Recipe) -> Option<Recipe> {
        self.recipes.insert(recipe.name.clone(), recipe)
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Recipe names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for RecipeBook {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut book = Self::new();
        for recipe in iter {
            book.insert(recipe);
        }
        book
    }
}
