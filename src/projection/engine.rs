//! Month-by-month projection compounding the annual growth rate monthly

use log::debug;

use super::series::{ProjectionPoint, ProjectionSeries};
use super::state::ProjectionState;
use crate::metrics::CalculationResults;
use crate::model::CalculatorState;

/// Monthly compounding factor for an annual growth rate given in percent
pub fn monthly_growth_factor(projected_growth_rate: f64) -> f64 {
    1.0 + (projected_growth_rate / 100.0 / 12.0)
}

/// Generate `state.projection_months` points starting at month 1.
///
/// Revenue and costs are seeded from `initial` and both compound at the same
/// monthly rate; profit is recomputed each month as revenue minus costs.
pub fn generate_projection(state: &CalculatorState, initial: &CalculationResults) -> ProjectionSeries {
    let growth_factor = monthly_growth_factor(state.projected_growth_rate);
    let mut series = ProjectionSeries::with_capacity(state.projection_months as usize);
    let mut current = ProjectionState::from_results(initial);

    for _month in 1..=state.projection_months {
        current.advance_month(growth_factor);
        series.add_point(ProjectionPoint {
            month: current.month,
            revenue: current.revenue,
            costs: current.costs,
            profit: current.profit,
        });
    }

    debug!(
        "Projected {} months at {:.4} monthly growth",
        series.len(),
        growth_factor
    );

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;
    use approx::assert_relative_eq;

    #[test]
    fn test_projection_length_and_month_index() {
        let state = CalculatorState::default();
        let initial = compute_metrics(&state);
        let series = generate_projection(&state, &initial);

        assert_eq!(series.len(), 24);
        let months: Vec<u32> = series.iter().map(|p| p.month).collect();
        assert_eq!(months, (1..=24).collect::<Vec<u32>>());
    }

    #[test]
    fn test_zero_growth_is_flat() {
        let state = CalculatorState {
            projected_growth_rate: 0.0,
            projection_months: 36,
            ..Default::default()
        };
        let initial = compute_metrics(&state);
        let series = generate_projection(&state, &initial);

        assert_eq!(series.len(), 36);
        for point in &series {
            assert_eq!(point.revenue, initial.monthly_revenue);
            assert_eq!(point.costs, initial.monthly_costs);
            assert_eq!(point.profit, point.revenue - point.costs);
        }
    }

    #[test]
    fn test_first_month_already_grown() {
        let state = CalculatorState {
            projected_growth_rate: 12.0,
            projection_months: 12,
            ..Default::default()
        };
        let initial = compute_metrics(&state);
        let series = generate_projection(&state, &initial);

        assert_relative_eq!(series.points[0].revenue, 108_000.0 * 1.01, max_relative = 1e-12);
        assert_relative_eq!(series.points[0].costs, 50_900.0 * 1.01, max_relative = 1e-12);
        assert_relative_eq!(
            series.points[11].revenue,
            108_000.0 * 1.01_f64.powi(12),
            max_relative = 1e-12
        );
        for point in &series {
            assert_eq!(point.profit, point.revenue - point.costs);
        }
    }

    #[test]
    fn test_negative_growth_shrinks() {
        let state = CalculatorState {
            projected_growth_rate: -24.0,
            projection_months: 6,
            ..Default::default()
        };
        let initial = compute_metrics(&state);
        let series = generate_projection(&state, &initial);

        assert!(series.points.windows(2).all(|w| w[1].revenue < w[0].revenue));
        assert_relative_eq!(monthly_growth_factor(-24.0), 0.98, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_months_is_empty() {
        let state = CalculatorState {
            projection_months: 0,
            ..Default::default()
        };
        let series = generate_projection(&state, &compute_metrics(&state));
        assert!(series.is_empty());
    }

    #[test]
    fn test_projection_is_restartable() {
        let state = CalculatorState::default();
        let initial = compute_metrics(&state);
        assert_eq!(generate_projection(&state, &initial), generate_projection(&state, &initial));
    }
}
