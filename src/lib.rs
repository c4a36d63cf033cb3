// src/lib.rs

//! Levain dough calculator
//!
//! Computes how much starter, flour, water and every other ingredient goes
//! into a starter-leavened dough of a given total mass.
//!
//! # Architecture
//!
//! - Recipes: typed records (hydration, sour factor, baker's percentages)
//!   loaded from TOML or JSON and validated once
//! - Solver: one dense linear system per request, solved by LU decomposition
//! - Pantry: immutable lookup of recipes and kitchen unit conversions
//! - Report: grams plus kitchen units, as text or JSON
//!
//! ```no_run
//! use levain::{ConfigPaths, Pantry};
//!
//! let pantry = Pantry::load(&ConfigPaths::in_dir("/etc/levain".as_ref()))?;
//! let formula = pantry.mix("overnight", 1000.0, 1.0)?;
//! for entry in &formula {
//!     println!("{}: {:.1} g", entry.name, entry.grams);
//! }
//! # Ok::<(), levain::Error>(())
//! ```

pub mod config;
mod error;
pub mod formula;
pub mod pantry;
pub mod recipe;
pub mod report;
pub mod solver;
pub mod units;

pub use config::{ConfigError, ConfigFormat, ConfigPaths};
pub use error::{Error, Result};
pub use formula::{DoughFormula, IngredientMass};
pub use pantry::Pantry;
pub use recipe::{Recipe, RecipeBook};
pub use report::{format_general, MixReport, ReportLine};
pub use solver::{LinearSystem, MassSolver, SolveError};
pub use units::{ConversionEntry, ConversionTable};
