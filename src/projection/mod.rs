//! Projection generator for monthly revenue, cost and profit series

mod state;
mod engine;
mod series;

pub use state::ProjectionState;
pub use engine::{generate_projection, monthly_growth_factor};
pub use series::{ProjectionPoint, ProjectionSeries, ProjectionSummary};
