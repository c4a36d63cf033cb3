// src/report.rs

//! Rendering solved formulas for people
//!
//! Each component is shown in grams and in its kitchen unit:
//!
//! ```text
//!   starter: 118.944 grams (0.626023 cups)
//!   flour: 527.038 grams (4.2163 cups)
//! ```
//!
//! Numbers use the C `%g` convention (six significant digits, trailing
//! zeros dropped).

use crate::error::{Error, Result};
use crate::formula::DoughFormula;
use crate::units::ConversionTable;
use serde::Serialize;

/// Significant digits shown for every number
const SIGNIFICANT_DIGITS: i32 = 6;

/// Format a number like C's `%g`
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to the shown precision first so the exponent accounts for carries
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// One rendered component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub name: String,
    pub grams: f64,
    pub amount: f64,
    pub unit: String,
}

impl ReportLine {
    /// `name: <grams> grams (<amount> <unit>)`
    pub fn to_text(&self) -> String {
        format!(
            "{}: {} grams ({} {})",
            self.name,
            format_general(self.grams),
            format_general(self.amount),
            self.unit
        )
    }
}

/// A formula paired with kitchen units, ready to print
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixReport {
    pub recipe: String,
    pub total_mass: f64,
    pub starter_hydration: f64,
    pub hydration: f64,
    pub ingredients: Vec<ReportLine>,
}

impl MixReport {
    /// Convert every component of `formula`; fails if a unit is missing
    pub fn new(formula: &DoughFormula, units: &ConversionTable) -> Result<Self> {
        let ingredients = formula
            .iter()
            .map(|entry| {
                let conversion = units
                    .get(&entry.name)
                    .ok_or_else(|| Error::MissingConversion(entry.name.clone()))?;
                Ok(ReportLine {
                    name: entry.name.clone(),
                    grams: entry.grams,
                    amount: conversion.convert(entry.grams),
                    unit: conversion.unit.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            recipe: formula.recipe().to_string(),
            total_mass: formula.total(),
            starter_hydration: formula.starter_hydration(),
            hydration: formula.hydration(),
            ingredients,
        })
    }

    /// Header plus one indented line per component
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{} ({} grams, starter hydration {}):\n",
            self.recipe,
            format_general(self.total_mass),
            format_general(self.starter_hydration)
        );
        for line in &self.ingredients {
            out.push_str(&format!("  {}\n", line.to_text()));
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
