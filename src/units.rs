// src/units.rs

//! Kitchen measurement conversions
//!
//! Maps an ingredient name to a factor that turns grams into a display unit
//! (cups, tsps, eggs, sticks...). The table must cover starter, flour and
//! water; the pantry checks that it covers every recipe ingredient too.

use crate::config::{read_config_file, ConfigError, ConfigFormat};
use crate::recipe::BASE_COMPONENTS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Conversion for one ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionEntry {
    /// Display units per gram
    pub value: f64,
    /// Display unit label
    pub unit: String,
}

impl ConversionEntry {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Entry for a unit that weighs `grams` grams (e.g. 125 g per cup of flour)
    pub fn per_unit(grams: f64, unit: impl Into<String>) -> Self {
        Self::new(1.0 / grams, unit)
    }

    /// Convert a mass in grams to this unit
    pub fn convert(&self, grams: f64) -> f64 {
        grams * self.value
    }
}

/// Ingredient name to conversion entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionTable {
    entries: BTreeMap<String, ConversionEntry>,
}

impl ConversionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: ConversionEntry) -> Option<ConversionEntry> {
        self.entries.insert(name.into(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&ConversionEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConversionEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<S: Into<String>> FromIterator<(S, ConversionEntry)> for ConversionTable {
    fn from_iter<I: IntoIterator<Item = (S, ConversionEntry)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, entry) in iter {
            table.insert(name, entry);
        }
        table
    }
}

/// Parse a conversion table from a string and validate it
pub fn parse_conversion_table(content: &str, format: ConfigFormat) -> Result<ConversionTable, ConfigError> {
    let table: ConversionTable = format.deserialize(content, "unit table")?;
    validate_conversion_table(&table)?;
    Ok(table)
}

/// Parse a conversion table from a `.toml` or `.json` file
pub fn parse_conversion_table_file(path: &Path) -> Result<ConversionTable, ConfigError> {
    let table: ConversionTable = read_config_file(path)?;
    validate_conversion_table(&table)?;
    info!("Loaded {} unit conversion(s) from {}", table.len(), path.display());
    Ok(table)
}

/// Check every entry and the presence of the base components
pub fn validate_conversion_table(table: &ConversionTable) -> Result<(), ConfigError> {
    for (name, entry) in table.iter() {
        if !entry.value.is_finite() || entry.value <= 0.0 {
            return Err(ConfigError::InvalidConversion {
                ingredient: name.to_string(),
                reason: format!("value must be a positive number, got {}", entry.value),
            });
        }
        if entry.unit.trim().is_empty() {
            return Err(ConfigError::InvalidConversion {
                ingredient: name.to_string(),
                reason: "unit label cannot be empty".to_string(),
            });
        }
    }

    for base in BASE_COMPONENTS {
        if !table.contains(base) {
            return Err(ConfigError::MissingConversion {
                ingredient: base.to_string(),
                needed_by: "every dough".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNITS: &str = r#"
[starter]
value = 0.005263157894736842
unit = "cups"

[flour]
value = 0.008
unit = "cups"

[water]
value = 0.00423728813559322
unit = "cups"

[egg]
value = 0.02
unit = "eggs"
"#;

    #[test]
    fn test_parse_units() {
        let table = parse_conversion_table(UNITS, ConfigFormat::Toml).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("egg").unwrap().unit, "eggs");
        assert!((table.get("flour").unwrap().convert(250.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_units_json() {
        let json = r#"{
            "starter": {"value": 0.005, "unit": "cups"},
            "flour": {"value": 0.008, "unit": "cups"},
            "water": {"value": 0.004, "unit": "cups"}
        }"#;
        let table = parse_conversion_table(json, ConfigFormat::Json).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_missing_base_component() {
        let content = "[flour]\nvalue = 0.008\nunit = \"cups\"\n";
        let err = parse_conversion_table(content, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingConversion { ref ingredient, .. } if ingredient == "starter"));
    }

    #[test]
    fn test_invalid_value() {
        let mut table: ConversionTable = BASE_COMPONENTS
            .iter()
            .map(|name| (*name, ConversionEntry::new(0.01, "cups")))
            .collect();
        assert!(validate_conversion_table(&table).is_ok());

        table.insert("salt", ConversionEntry::new(0.0, "tsps"));
        let err = validate_conversion_table(&table).unwrap_err();
        assert!(err.to_string().contains("salt"));
    }

    #[test]
    fn test_empty_unit_label() {
        let table: ConversionTable = BASE_COMPONENTS
            .iter()
            .map(|name| (*name, ConversionEntry::new(0.01, " ")))
            .collect();
        assert!(matches!(
            validate_conversion_table(&table),
            Err(ConfigError::InvalidConversion { .. })
        ));
    }

    #[test]
    fn test_per_unit() {
        let butter = ConversionEntry::per_unit(113.0, "sticks");
        assert!((butter.convert(226.0) - 2.0).abs() < 1e-12);
    }
}
