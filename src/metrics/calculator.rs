//! Current-period financial metrics for a practice

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{CalculatorState, Segment};

/// Retention is capped at one year when sizing the active client base
pub const RETENTION_CAP_MONTHS: f64 = 12.0;

/// Day-count convention used by the break-even figure
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Snapshot of current-period metrics derived from one state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResults {
    pub monthly_revenue: f64,

    /// Segment costs plus fixed costs
    pub monthly_costs: f64,

    pub monthly_profit: f64,
    pub patient_lifetime_value: f64,

    /// Total monthly cost against daily revenue (30-day month)
    pub break_even_point: f64,

    /// Average acquisition cost per new patient
    pub customer_acquisition_cost: f64,

    pub ltv_cac_ratio: f64,

    /// Fraction of revenue left after segment costs (fixed costs excluded)
    pub contribution_margin: f64,

    /// Monthly profit over total costs, in percent
    pub roi: f64,

    pub annual_revenue: f64,
    pub annual_profit: f64,
    pub active_clients: f64,
}

/// Monthly revenue and cost contribution of a single segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentContribution {
    pub active_clients: f64,
    pub monthly_revenue: f64,
    pub new_patient_costs: f64,
    pub medication_costs: f64,
    pub ongoing_visit_costs: f64,
    pub acquisition_cost: f64,
}

impl SegmentContribution {
    pub fn from_segment(segment: &Segment) -> Self {
        let active_clients =
            segment.new_patients_per_month * segment.average_retention_months.min(RETENTION_CAP_MONTHS);
        let per_new_patient = segment.acquisition_cost + segment.initial_np_visit_cost;

        Self {
            active_clients,
            monthly_revenue: segment.subscription_fee * active_clients,
            new_patient_costs: per_new_patient * segment.new_patients_per_month,
            medication_costs: segment.medication_cost * active_clients,
            // Undefined (non-finite) when months_between_visits is zero
            ongoing_visit_costs: (segment.ongoing_np_visit_cost * active_clients)
                / segment.months_between_visits,
            acquisition_cost: per_new_patient * segment.new_patients_per_month,
        }
    }

    /// Variable costs of the segment, excluding fixed costs
    pub fn monthly_costs(&self) -> f64 {
        self.new_patient_costs + self.medication_costs + self.ongoing_visit_costs
    }
}

/// Compute current-period metrics for the whole practice.
///
/// Never fails: an empty segment list, a zero visit interval or zero totals
/// produce NaN or infinite fields rather than an error, and nothing is clamped.
pub fn compute_metrics(state: &CalculatorState) -> CalculationResults {
    let mut total_monthly_revenue = 0.0;
    let mut total_monthly_costs = 0.0;
    let mut total_active_clients = 0.0;
    let mut total_cac = 0.0;

    for segment in &state.segments {
        let contribution = SegmentContribution::from_segment(segment);
        total_active_clients += contribution.active_clients;
        total_monthly_revenue += contribution.monthly_revenue;
        total_monthly_costs += contribution.monthly_costs();
        total_cac += contribution.acquisition_cost;
    }

    let total_costs_with_fixed = total_monthly_costs + state.fixed_costs;
    let monthly_profit = total_monthly_revenue - total_costs_with_fixed;

    let average_cac = total_cac / state.total_new_patients();
    let average_revenue_per_client = total_monthly_revenue / total_active_clients;

    // Simple mean across segments, not weighted by patient count
    let average_retention_months = state
        .segments
        .iter()
        .map(|s| s.average_retention_months)
        .sum::<f64>()
        / state.segments.len() as f64;
    let patient_lifetime_value = average_revenue_per_client * average_retention_months;

    let results = CalculationResults {
        monthly_revenue: total_monthly_revenue,
        monthly_costs: total_costs_with_fixed,
        monthly_profit,
        patient_lifetime_value,
        break_even_point: total_costs_with_fixed / (total_monthly_revenue / DAYS_PER_MONTH),
        customer_acquisition_cost: average_cac,
        ltv_cac_ratio: patient_lifetime_value / average_cac,
        contribution_margin: (total_monthly_revenue - total_monthly_costs) / total_monthly_revenue,
        roi: (monthly_profit / total_costs_with_fixed) * 100.0,
        annual_revenue: total_monthly_revenue * 12.0,
        annual_profit: monthly_profit * 12.0,
        active_clients: total_active_clients,
    };

    debug!(
        "Metrics for {} segments: revenue={:.2} costs={:.2} profit={:.2}",
        state.segments.len(),
        results.monthly_revenue,
        results.monthly_costs,
        results.monthly_profit
    );

    results
}
