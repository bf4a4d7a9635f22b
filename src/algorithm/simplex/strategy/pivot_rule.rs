//! # Pivot rules
//!
//! Strategies for selecting the column that enters the basis in the primal Simplex method.
use std::cmp::Ordering;

use itertools::Itertools;

use crate::data::number_types::traits::Field;
use crate::data::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent of
/// the strategy, see `ratio_test`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The column index and its objective row value, or `None` when no objective row value is
    /// negative. In the latter case the tableau is optimal.
    fn select_primal_pivot_column<F: Field>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// Ties are broken in favor of the lowest column index.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Field>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let costs = tableau.objective_row();

        costs.iter()
            .position_min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|column| (column, costs[column]))
            .filter(|(_, cost)| *cost < F::zero())
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Field>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        tableau.objective_row().iter()
            .copied()
            .enumerate()
            .find(|(_, cost)| *cost < F::zero())
    }
}
