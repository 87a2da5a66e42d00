//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use num_traits::Float;

use crate::algorithm::simplex::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    #[allow(missing_docs)]
    fn new() -> Self;
    /// Column selection rule for the primal Simplex method.
    ///
    /// Relative costs within `tolerance` of zero are not considered negative, such that this
    /// method returns `None` exactly when `Tableau::is_optimal` holds for the same tolerance.
    fn select_primal_pivot_column<F: Float>(
        &mut self,
        tableau: &Tableau<F>,
        tolerance: F,
    ) -> Option<usize>;
}

/// Pivot on the column with the most negative relative cost (Dantzig's rule).
///
/// On ties, the column with the lowest index is chosen.
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Float>(
        &mut self,
        tableau: &Tableau<F>,
        tolerance: F,
    ) -> Option<usize> {
        let mut minimum = -tolerance;
        let mut selected = None;
        for (column, &cost) in tableau.relative_costs().iter().enumerate() {
            // Strict comparison: the first occurrence of the minimum is kept
            if cost < minimum {
                minimum = cost;
                selected = Some(column);
            }
        }

        selected
    }
}
