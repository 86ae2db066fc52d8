//! Subscription Calculator - Financial projections for subscription-based healthcare practices
//!
//! This library provides:
//! - Current-period practice metrics (revenue, costs, profit, LTV, CAC, break-even)
//! - Exit valuation estimates from projected revenue, profit and client count
//! - Month-by-month revenue, cost and profit projections
//! - An editable session that recomputes a dashboard report on every change

pub mod error;
pub mod model;
pub mod metrics;
pub mod projection;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use model::{CalculatorState, Segment, SegmentField};
pub use metrics::{compute_metrics, estimate_exit_valuation, CalculationResults};
pub use projection::{generate_projection, ProjectionPoint, ProjectionSeries};
pub use report::Report;
pub use session::CalculatorSession;
