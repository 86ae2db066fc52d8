//! Full computation for one state and its dashboard rendering
//!
//! Non-finite engine output is shown as "N/A" here; the engine itself never
//! clamps or replaces it.

use std::fmt;

use serde::Serialize;

use crate::metrics::{compute_metrics, estimate_exit_valuation, CalculationResults};
use crate::model::CalculatorState;
use crate::projection::{generate_projection, ProjectionSeries};

/// Placeholder shown for NaN or infinite values
pub const NOT_AVAILABLE: &str = "N/A";

/// Everything derived from one state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub results: CalculationResults,
    pub exit_valuation: f64,
    pub projection: ProjectionSeries,
}

impl Report {
    /// Run the metrics calculator, then valuation and projection on its output
    pub fn compute(state: &CalculatorState) -> Self {
        let results = compute_metrics(state);
        let exit_valuation = estimate_exit_valuation(
            results.annual_revenue,
            results.annual_profit,
            state.industry_multiple,
            state.projected_growth_rate,
            results.active_clients,
            state.projection_months,
        );
        let projection = generate_projection(state, &results);

        Self {
            results,
            exit_valuation,
            projection,
        }
    }

    /// Dashboard tiles in display order
    pub fn tiles(&self) -> Vec<(&'static str, String)> {
        let r = &self.results;
        vec![
            ("Monthly Revenue", format_currency(r.monthly_revenue)),
            ("Monthly Costs", format_currency(r.monthly_costs)),
            ("Monthly Profit", format_currency(r.monthly_profit)),
            ("Break-even Point", format_months(r.break_even_point)),
            ("Patient LTV", format_currency(r.patient_lifetime_value)),
            ("Customer Acquisition Cost", format_currency(r.customer_acquisition_cost)),
            ("LTV:CAC Ratio", format_ratio(r.ltv_cac_ratio)),
            ("ROI (Monthly)", format_percent(r.roi)),
            ("Contribution Margin", format_percent(r.contribution_margin * 100.0)),
            ("Active Clients", format_count(r.active_clients)),
            ("Potential Exit Valuation", format_currency(self.exit_valuation)),
        ]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.tiles() {
            writeln!(f, "{:<28}{:>20}", label, value)?;
        }
        Ok(())
    }
}

/// `$1,234.56`, `-$1,234.56`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let digits = group_thousands(&format!("{:.2}", value.abs()));
    if value < 0.0 && digits != "0.00" {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Value already in percent units, e.g. `57.1` -> `57.10%`
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let digits = group_thousands(&format!("{:.2}", value.abs()));
    if value < 0.0 && digits != "0.00" {
        format!("-{}%", digits)
    } else {
        format!("{}%", digits)
    }
}

/// Two decimal places
pub fn format_ratio(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.2}", value)
}

pub fn format_months(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.2} months", value)
}

pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{}", value)
}

/// Insert commas into the integer part of an unsigned decimal string
fn group_thousands(digits: &str) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}
