// src/solver.rs

//! Mass balance solver
//!
//! Turns a recipe, a starter hydration and a target dough mass into grams of
//! starter, flour, water and every named ingredient by solving a small dense
//! linear system. Unknowns are ordered starter, flour, water, then the
//! recipe's ingredients in recipe order:
//!
//! | row     | constraint                                                           |
//! |---------|----------------------------------------------------------------------|
//! | 0       | `(1/(sf*(h+1)) - 1/(sh+1)) * starter - flour = 0`                    |
//! | 1       | `(1/sf - 1) * starter - flour - water = 0`                           |
//! | 2       | `sum of every mass = total_mass`                                     |
//! | 3 + i   | `p_i/(1+sh) * starter + p_i * flour - mass_i = 0`                    |
//!
//! where `h` is the dough hydration, `sf` the sour factor, `sh` the starter
//! hydration and `p_i` the baker's percentage of ingredient `i`. Rows 0 and 1
//! together fix total water over total flour at `h`.

use crate::formula::{DoughFormula, IngredientMass};
use crate::recipe::Recipe;
use nalgebra::{DMatrix, DVector};
use thiserror::Error;
use tracing::{debug, warn};

/// Smallest LU pivot accepted as non-singular once every row and column of
/// the system has been scaled to a largest entry of 1
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;

const STARTER_ROW: usize = 0;
const FLOUR_ROW: usize = 1;
const TOTAL_ROW: usize = 2;
const FIRST_INGREDIENT: usize = 3;

/// Errors that can occur while solving a mass balance
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Requested dough mass is zero, negative or not a number
    #[error("Total dough mass must be a positive number of grams, got {0}")]
    NonPositiveMass(f64),

    /// A parameter makes a coefficient undefined (division by zero)
    #[error("Parameter '{parameter}' = {value} makes the mass balance undefined")]
    Domain { parameter: String, value: f64 },

    /// The assembled system has no unique solution
    #[error(
        "Mass balance for recipe '{recipe}' has no unique solution \
         (hydration={hydration}, sour_factor={sour_factor}, \
         starter_hydration={starter_hydration}, total_mass={total_mass})"
    )]
    Singular {
        recipe: String,
        hydration: f64,
        sour_factor: f64,
        starter_hydration: f64,
        total_mass: f64,
    },
}

fn domain_error(parameter: impl Into<String>, value: f64) -> SolveError {
    SolveError::Domain {
        parameter: parameter.into(),
        value,
    }
}

/// Reject values that would divide by zero or poison the matrix
fn check_domain(starter_hydration: f64, recipe: &Recipe) -> Result<(), SolveError> {
    if !recipe.sour_factor.is_finite() || recipe.sour_factor == 0.0 {
        return Err(domain_error("sour_factor", recipe.sour_factor));
    }
    if !recipe.hydration.is_finite() || recipe.hydration == -1.0 {
        return Err(domain_error("hydration", recipe.hydration));
    }
    if !starter_hydration.is_finite() || starter_hydration == -1.0 {
        return Err(domain_error("starter_hydration", starter_hydration));
    }
    for ingredient in &recipe.ingredients {
        if !ingredient.percent.is_finite() {
            return Err(domain_error(
                format!("baker's percentage of {}", ingredient.name),
                ingredient.percent,
            ));
        }
    }
    Ok(())
}

/// Coefficient matrix, right-hand side and row labels for one recipe
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
    labels: Vec<String>,
}

impl LinearSystem {
    /// Build the system for `recipe`, rejecting parameters that divide by zero
    pub fn assemble(total_mass: f64, starter_hydration: f64, recipe: &Recipe) -> Result<Self, SolveError> {
        check_domain(starter_hydration, recipe)?;

        let labels: Vec<String> = recipe
            .component_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let n = labels.len();

        let hydration = recipe.hydration;
        let sour_factor = recipe.sour_factor;
        let starter_flour_fraction = 1.0 / (1.0 + starter_hydration);

        let mut matrix = DMatrix::<f64>::zeros(n, n);
        let mut rhs = DVector::<f64>::zeros(n);

        matrix[(STARTER_ROW, 0)] = 1.0 / (sour_factor * (hydration + 1.0)) - starter_flour_fraction;
        matrix[(STARTER_ROW, 1)] = -1.0;

        matrix[(FLOUR_ROW, 0)] = 1.0 / sour_factor - 1.0;
        matrix[(FLOUR_ROW, 1)] = -1.0;
        matrix[(FLOUR_ROW, 2)] = -1.0;

        matrix.row_mut(TOTAL_ROW).fill(1.0);
        rhs[TOTAL_ROW] = total_mass;

        for (idx, ingredient) in recipe.ingredients.iter().enumerate() {
            let row = FIRST_INGREDIENT + idx;
            matrix[(row, 0)] = ingredient.percent * starter_flour_fraction;
            matrix[(row, 1)] = ingredient.percent;
            matrix[(row, row)] = -1.0;
        }

        debug!("Assembled {}x{} mass balance for recipe '{}'", n, n, recipe.name);

        Ok(Self { matrix, rhs, labels })
    }

    pub fn dimension(&self) -> usize {
        self.labels.len()
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Component name of each row/column
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Scale every row, then every column, so its largest entry is 1
    ///
    /// Returns the scaled matrix with the row and column factors, or None if
    /// a row or column is entirely zero.
    fn equilibrate(&self) -> Option<(DMatrix<f64>, DVector<f64>, DVector<f64>)> {
        let n = self.dimension();
        let mut scaled = self.matrix.clone();
        let mut row_scale = DVector::<f64>::zeros(n);
        let mut col_scale = DVector::<f64>::zeros(n);

        for (i, mut row) in scaled.row_iter_mut().enumerate() {
            let largest = row.amax();
            if largest == 0.0 || !largest.is_finite() {
                return None;
            }
            row_scale[i] = 1.0 / largest;
            row.scale_mut(row_scale[i]);
        }
        for (j, mut column) in scaled.column_iter_mut().enumerate() {
            let largest = column.amax();
            if largest == 0.0 || !largest.is_finite() {
                return None;
            }
            col_scale[j] = 1.0 / largest;
            column.scale_mut(col_scale[j]);
        }

        Some((scaled, row_scale, col_scale))
    }

    /// LU with partial pivoting on the equilibrated matrix; None if it is
    /// numerically singular
    pub fn solve(&self) -> Option<DVector<f64>> {
        let (scaled, row_scale, col_scale) = self.equilibrate()?;
        let lu = scaled.lu();

        let min_pivot = lu.u().diagonal().amin();
        if min_pivot <= SINGULARITY_TOLERANCE {
            debug!("Smallest equilibrated pivot {:e}", min_pivot);
            return None;
        }

        let scaled_solution = lu.solve(&self.rhs.component_mul(&row_scale))?;
        let solution = scaled_solution.component_mul(&col_scale);
        solution.iter().all(|v| v.is_finite()).then_some(solution)
    }
}

/// Computes ingredient masses for a recipe
///
/// Stateless; one call builds and solves one system.
#[derive(Debug, Clone, Copy, Default)]
pub struct MassSolver;

impl MassSolver {
    pub fn new() -> Self {
        Self
    }

    /// Solve for the mass of every component of `recipe` in a dough of
    /// `total_mass` grams made with a starter of `starter_hydration`
    pub fn solve(&self, total_mass: f64, starter_hydration: f64, recipe: &Recipe) -> Result<DoughFormula, SolveError> {
        if !total_mass.is_finite() || total_mass <= 0.0 {
            return Err(SolveError::NonPositiveMass(total_mass));
        }

        let system = LinearSystem::assemble(total_mass, starter_hydration, recipe)?;

        let masses = system.solve().ok_or_else(|| SolveError::Singular {
            recipe: recipe.name.clone(),
            hydration: recipe.hydration,
            sour_factor: recipe.sour_factor,
            starter_hydration,
            total_mass,
        })?;

        let entries: Vec<IngredientMass> = system
            .labels
            .into_iter()
            .zip(masses.iter())
            .map(|(name, &grams)| IngredientMass { name, grams })
            .collect();

        for entry in entries.iter().filter(|e| e.grams < 0.0) {
            warn!(
                "Recipe '{}' needs a negative amount of {} ({:.1} g); check hydration and sour factor",
                recipe.name, entry.name, entry.grams
            );
        }

        debug!("Solved recipe '{}': {:?}", recipe.name, entries);

        Ok(DoughFormula::new(recipe.name.clone(), starter_hydration, entries))
    }
}
