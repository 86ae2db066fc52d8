//! Practice input model and loading

mod data;
pub mod loader;

pub use data::{CalculatorState, Segment, SegmentField, DEFAULT_PROJECTION_MONTHS, MAX_SEGMENTS};
pub use loader::{load_segments, load_segments_from_reader, load_state, load_state_from_reader, save_state};
