// src/formula.rs

//! Solved dough formula: grams of every component, in solve order

use serde::Serialize;

/// Mass of one component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientMass {
    pub name: String,
    pub grams: f64,
}

/// Output of the mass solver
///
/// Entries are always starter, flour, water, then the recipe's named
/// ingredients in recipe order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoughFormula {
    recipe: String,
    starter_hydration: f64,
    entries: Vec<IngredientMass>,
}

impl DoughFormula {
    pub(crate) fn new(recipe: impl Into<String>, starter_hydration: f64, entries: Vec<IngredientMass>) -> Self {
        Self {
            recipe: recipe.into(),
            starter_hydration,
            entries,
        }
    }

    pub fn recipe(&self) -> &str {
        &self.recipe
    }

    pub fn starter_hydration(&self) -> f64 {
        self.starter_hydration
    }

    pub fn entries(&self) -> &[IngredientMass] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IngredientMass> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grams of a component by name
    pub fn grams(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.grams)
    }

    pub fn starter(&self) -> f64 {
        self.entries[0].grams
    }

    pub fn flour(&self) -> f64 {
        self.entries[1].grams
    }

    pub fn water(&self) -> f64 {
        self.entries[2].grams
    }

    /// Named ingredients after starter, flour and water
    pub fn additions(&self) -> &[IngredientMass] {
        &self.entries[3..]
    }

    /// Sum of every component
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.grams).sum()
    }

    /// Flour in the starter plus fresh flour
    pub fn total_flour(&self) -> f64 {
        self.flour() + self.starter() / (1.0 + self.starter_hydration)
    }

    /// Water in the starter plus fresh water
    pub fn total_water(&self) -> f64 {
        self.water() + self.starter() * self.starter_hydration / (1.0 + self.starter_hydration)
    }

    /// Hydration of the finished dough, recomputed from the masses
    pub fn hydration(&self) -> f64 {
        self.total_water() / self.total_flour()
    }

    /// Baker's percentage of a component, recomputed from the masses
    pub fn bakers_percentage(&self, name: &str) -> Option<f64> {
        self.grams(name).map(|g| g / self.total_flour())
    }
}

impl<'a> IntoIterator for &'a DoughFormula {
    type Item = &'a IngredientMass;
    type IntoIter = std::slice::Iter<'a, IngredientMass>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula() -> DoughFormula {
        DoughFormula::new(
            "sour",
            1.0,
            vec![
                IngredientMass { name: "starter".into(), grams: 200.0 },
                IngredientMass { name: "flour".into(), grams: 500.0 },
                IngredientMass { name: "water".into(), grams: 290.0 },
                IngredientMass { name: "salt".into(), grams: 10.0 },
            ],
        )
    }

    #[test]
    fn test_accessors() {
        let f = formula();
        assert_eq!(f.recipe(), "sour");
        assert_eq!(f.len(), 4);
        assert_eq!(f.starter(), 200.0);
        assert_eq!(f.flour(), 500.0);
        assert_eq!(f.water(), 290.0);
        assert_eq!(f.additions().len(), 1);
        assert_eq!(f.grams("salt"), Some(10.0));
        assert_eq!(f.grams("sugar"), None);
        assert_eq!(f.total(), 1000.0);
    }

    #[test]
    fn test_recomputed_ratios() {
        let f = formula();
        assert_eq!(f.total_flour(), 600.0);
        assert_eq!(f.total_water(), 390.0);
        assert!((f.hydration() - 0.65).abs() < 1e-12);
        assert!((f.bakers_percentage("salt").unwrap() - 10.0 / 600.0).abs() < 1e-12);
    }
}
