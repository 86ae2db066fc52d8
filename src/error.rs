//! Error type for everything that surrounds the calculation engine
//!
//! The engine functions themselves never fail; these errors come from
//! loading state, validating it, and editing it through a session.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalculatorError>;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid state JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid segment CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("At least one segment is required")]
    EmptySegments,
    #[error("Segment '{segment}' has zero months between visits")]
    ZeroVisitInterval { segment: String },
    #[error("Total new patients per month across all segments is zero")]
    NoNewPatients,
    #[error("Projection months must be greater than zero")]
    ZeroProjectionMonths,
    #[error("A practice may hold at most {max} segments")]
    SegmentLimit { max: usize },
    #[error("Segment index {index} out of range (have {len})")]
    SegmentIndex { index: usize, len: usize },
    #[error("Unknown segment field: {0}")]
    UnknownField(String),
}
