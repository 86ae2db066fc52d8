//! Metrics calculator and exit valuation estimator

mod calculator;
mod valuation;

pub use calculator::{compute_metrics, CalculationResults, SegmentContribution, DAYS_PER_MONTH, RETENTION_CAP_MONTHS};
pub use valuation::{estimate_exit_valuation, CLIENT_PREMIUM, PROFIT_MULTIPLE_FACTOR, PROFIT_WEIGHT, REVENUE_WEIGHT};
