//! # The Simplex algorithm
//!
//! The primal Simplex method, executed directly on a dense tableau. Every iteration selects a
//! column with a negative relative cost, finds the leaving row with a ratio test and eliminates the
//! column from all other rows. Iteration stops when no relative cost is negative.
//!
//! There is no anti-cycling rule and no tolerance around zero: a highly degenerate problem may
//! cycle forever.
use log::{debug, info, trace, warn};
use thiserror::Error;

use crate::algorithm::simplex::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::simplex::strategy::ratio_test::{compute_ratios, select_primal_pivot_row};
use crate::data::number_types::traits::Field;
use crate::data::tableau::Tableau;

pub mod strategy;

/// Coordinates of the element that was pivoted on.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pivot {
    /// Row of the variable leaving the basis.
    pub row: usize,
    /// Column of the variable entering the basis.
    pub column: usize,
}

/// No further valid pivot exists under the ratio test.
///
/// The tableau is returned in the state it had after the last completed pivot.
#[derive(Error, Debug)]
pub enum DegenerateError<F> {
    /// The element selected by the ratio test is zero, negative or `NaN`.
    #[error("pivot element at row {row}, column {column} should be strictly positive, but is {element}")]
    NonPositivePivot {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
        #[allow(missing_docs)]
        element: F,
        #[allow(missing_docs)]
        tableau: Tableau<F>,
    },
    /// A column should enter the basis, but the tableau only has an objective row.
    #[error("column {column} should enter the basis, but there are no constraint rows")]
    NoConstraintRows {
        #[allow(missing_docs)]
        column: usize,
        #[allow(missing_docs)]
        tableau: Tableau<F>,
    },
}

impl<F> DegenerateError<F> {
    /// Tableau after the last completed pivot.
    pub fn tableau(&self) -> &Tableau<F> {
        match self {
            DegenerateError::NonPositivePivot { tableau, .. } => tableau,
            DegenerateError::NoConstraintRows { tableau, .. } => tableau,
        }
    }

    /// Take the tableau after the last completed pivot.
    pub fn into_tableau(self) -> Tableau<F> {
        match self {
            DegenerateError::NonPositivePivot { tableau, .. } => tableau,
            DegenerateError::NoConstraintRows { tableau, .. } => tableau,
        }
    }
}

/// Pivot until no relative cost is negative.
///
/// The entering column is the one with the most negative relative cost.
///
/// # Arguments
///
/// * `tableau`: Constraint rows followed by the objective row, right hand side in the last column.
///
/// # Return value
///
/// The same tableau, in optimal form.
///
/// # Errors
///
/// When the ratio test selects an element that is not strictly positive.
pub fn optimize<F: Field>(tableau: Tableau<F>) -> Result<Tableau<F>, DegenerateError<F>> {
    optimize_with(tableau, |_, _| {})
}

/// Pivot until no relative cost is negative, reporting every pivot.
///
/// # Arguments
///
/// * `tableau`: Constraint rows followed by the objective row, right hand side in the last column.
/// * `observer`: Called after every completed pivot, with the tableau in its new state.
pub fn optimize_with<F: Field>(
    tableau: Tableau<F>,
    observer: impl FnMut(Pivot, &Tableau<F>),
) -> Result<Tableau<F>, DegenerateError<F>> {
    optimize_with_rule::<SteepestDescentAlongVariable, _>(tableau, observer)
}

/// Pivot until no relative cost is negative, using a specific rule to select the entering column.
///
/// # Arguments
///
/// * `tableau`: Constraint rows followed by the objective row, right hand side in the last column.
/// * `observer`: Called after every completed pivot, with the tableau in its new state.
pub fn optimize_with_rule<PR: PivotRule, F: Field>(
    mut tableau: Tableau<F>,
    mut observer: impl FnMut(Pivot, &Tableau<F>),
) -> Result<Tableau<F>, DegenerateError<F>> {
    let mut rule = PR::new();
    let mut ratios = Vec::with_capacity(tableau.nr_constraints());
    let mut pivot_row = Vec::with_capacity(tableau.nr_columns());
    let mut nr_pivots = 0_usize;

    loop {
        let Some((column, cost)) = rule.select_primal_pivot_column(&tableau) else {
            info!(
                "Optimal after {} pivots, objective value {}",
                nr_pivots, tableau.objective_value(),
            );
            break Ok(tableau);
        };

        compute_ratios(&tableau, column, &mut ratios);
        let Some(row) = select_primal_pivot_row(&ratios) else {
            warn!("Column {} has relative cost {}, but there are no constraint rows", column, cost);
            break Err(DegenerateError::NoConstraintRows { column, tableau });
        };
        trace!("Column {} with relative cost {} enters, row {} with ratio {} leaves", column, cost, row, ratios[row]);

        let element = tableau.get(row, column);
        // Also rejects NaN
        if !(element > F::zero()) {
            warn!("Pivot element {} at ({}, {}) is not strictly positive", element, row, column);
            break Err(DegenerateError::NonPositivePivot { row, column, element, tableau });
        }

        bring_into_basis(&mut tableau, row, column, &mut pivot_row);
        nr_pivots += 1;
        debug!("Pivot {} on ({}, {}), element {}", nr_pivots, row, column, element);

        observer(Pivot { row, column }, &tableau);
    }
}

/// Normalize the pivot row and eliminate the pivot column from all other rows.
///
/// # Arguments
///
/// * `tableau`: Tableau to pivot in.
/// * `row`: Pivot row.
/// * `column`: Pivot column.
/// * `pivot_row`: Scratch space, overwritten with a copy of the normalized pivot row.
fn bring_into_basis<F: Field>(
    tableau: &mut Tableau<F>,
    row: usize,
    column: usize,
    pivot_row: &mut Vec<F>,
) {
    let element = tableau.get(row, column);
    debug_assert!(element > F::zero());

    tableau.multiply_row(row, F::one() / element);
    pivot_row.clear();
    pivot_row.extend_from_slice(tableau.row(row));

    for i in (0..tableau.nr_rows()).filter(|&i| i != row) {
        // Read before the row is written
        let factor = tableau.get(i, column);
        tableau.subtract_multiple(i, pivot_row, factor);
    }
}
