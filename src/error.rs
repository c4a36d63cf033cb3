// src/error.rs

//! Crate-level error type
//!
//! Each layer has its own error enum (`ConfigError` for loading tables,
//! `SolveError` for the mass balance). `Error` wraps both and adds the
//! lookup failures that only make sense once a `Pantry` exists.

use thiserror::Error;

use crate::config::ConfigError;
use crate::solver::SolveError;

/// Errors surfaced by the public API
#[derive(Debug, Error)]
pub enum Error {
    /// Recipe or unit tables could not be loaded or failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The mass balance could not be solved
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// Requested recipe is not in the recipe book
    #[error("Unknown recipe '{name}' (available: {available})")]
    UnknownRecipe { name: String, available: String },

    /// An ingredient has no entry in the conversion table
    #[error("No unit conversion for ingredient '{0}'")]
    MissingConversion(String),

    /// Report could not be serialized
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// True for errors caused by the caller's request rather than by
    /// configuration or numerics
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownRecipe { .. } | Error::Solve(SolveError::NonPositiveMass(_))
        )
    }
}

/// Result type for levain operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_recipe_message() {
        let err = Error::UnknownRecipe {
            name: "rye".to_string(),
            available: "bagel, sour".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown recipe 'rye' (available: bagel, sour)");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_solve_error_is_transparent() {
        let err: Error = SolveError::NonPositiveMass(-5.0).into();
        assert!(err.to_string().contains("-5"));
        assert!(err.is_input_error());

        let err: Error = SolveError::Domain {
            parameter: "sour_factor".to_string(),
            value: 0.0,
        }
        .into();
        assert!(err.to_string().contains("sour_factor"));
        assert!(!err.is_input_error());
    }
}
