//! Running state carried from one projected month to the next

use crate::metrics::CalculationResults;

/// Compounded position of the practice at a point in the projection
#[derive(Debug, Clone, Copy)]
pub struct ProjectionState {
    /// Current projection month (1-indexed, 0 before the first advance)
    pub month: u32,

    /// Monthly revenue after compounding
    pub revenue: f64,

    /// Monthly costs (including fixed) after compounding
    pub costs: f64,

    /// Revenue minus costs
    pub profit: f64,
}

impl ProjectionState {
    /// Seed from the current-period metrics
    pub fn from_results(initial: &CalculationResults) -> Self {
        Self {
            month: 0,
            revenue: initial.monthly_revenue,
            costs: initial.monthly_costs,
            profit: initial.monthly_profit,
        }
    }

    /// Advance one month: revenue and costs grow by the same factor,
    /// profit is re-derived from them rather than compounded on its own
    pub fn advance_month(&mut self, growth_factor: f64) {
        self.month += 1;
        self.revenue *= growth_factor;
        self.costs *= growth_factor;
        self.profit = self.revenue - self.costs;
    }
}
