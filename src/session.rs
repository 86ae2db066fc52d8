//! Editable calculator session
//!
//! Holds the single current state and the report computed from it. Each edit
//! produces a new state value and recomputes the report; the engine never
//! keeps a reference to the state.

use log::{debug, warn};

use crate::error::{CalculatorError, Result};
use crate::model::{CalculatorState, Segment, SegmentField, DEFAULT_PROJECTION_MONTHS, MAX_SEGMENTS};
use crate::report::Report;

/// Parse numeric form input; anything unparsable (or NaN) counts as zero
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

/// Parse the projection length; unparsable or zero input falls back to 24 months
pub fn parse_months(input: &str) -> u32 {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|&m| m > 0)
        .unwrap_or(DEFAULT_PROJECTION_MONTHS)
}

/// Current state plus the report derived from it
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    state: CalculatorState,
    report: Report,
}

impl CalculatorSession {
    pub fn new(state: CalculatorState) -> Self {
        if let Err(e) = state.validate() {
            warn!("Starting session with incomplete inputs: {}", e);
        }
        let report = Report::compute(&state);
        Self { state, report }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Replace the whole state
    pub fn replace(&mut self, state: CalculatorState) {
        if state == self.state {
            return;
        }
        self.state = state;
        self.report = Report::compute(&self.state);
        debug!("Recomputed report for {} segments", self.state.segments.len());
    }

    /// Apply an edit to a copy of the state and swap it in on success
    fn update<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut CalculatorState) -> Result<()>,
    {
        let mut next = self.state.clone();
        edit(&mut next)?;
        self.replace(next);
        Ok(())
    }

    fn segment_mut(state: &mut CalculatorState, index: usize) -> Result<&mut Segment> {
        let len = state.segments.len();
        state
            .segments
            .get_mut(index)
            .ok_or(CalculatorError::SegmentIndex { index, len })
    }

    pub fn set_fixed_costs(&mut self, input: &str) {
        let value = parse_amount(input);
        self.replace(CalculatorState {
            fixed_costs: value,
            ..self.state.clone()
        });
    }

    pub fn set_industry_multiple(&mut self, input: &str) {
        let value = parse_amount(input);
        self.replace(CalculatorState {
            industry_multiple: value,
            ..self.state.clone()
        });
    }

    pub fn set_growth_rate(&mut self, input: &str) {
        let value = parse_amount(input);
        self.replace(CalculatorState {
            projected_growth_rate: value,
            ..self.state.clone()
        });
    }

    pub fn set_projection_months(&mut self, input: &str) {
        let months = parse_months(input);
        self.replace(CalculatorState {
            projection_months: months,
            ..self.state.clone()
        });
    }

    pub fn set_segment_field(&mut self, index: usize, field: SegmentField, input: &str) -> Result<()> {
        let value = parse_amount(input);
        self.update(|state| {
            Self::segment_mut(state, index)?.set(field, value);
            Ok(())
        })
    }

    pub fn set_segment_name(&mut self, index: usize, name: &str) -> Result<()> {
        self.update(|state| {
            Self::segment_mut(state, index)?.name = name.to_string();
            Ok(())
        })
    }

    /// Append a blank numbered segment; refused once the practice holds five
    pub fn add_segment(&mut self) -> Result<()> {
        self.update(|state| {
            if state.segments.len() >= MAX_SEGMENTS {
                return Err(CalculatorError::SegmentLimit { max: MAX_SEGMENTS });
            }
            let number = state.segments.len() + 1;
            state.segments.push(Segment::blank(number));
            Ok(())
        })
    }

    /// Remove a segment; removing the last one is allowed
    pub fn remove_segment(&mut self, index: usize) -> Result<Segment> {
        let mut next = self.state.clone();
        let len = next.segments.len();
        if index >= len {
            return Err(CalculatorError::SegmentIndex { index, len });
        }
        let removed = next.segments.remove(index);
        self.replace(next);
        Ok(removed)
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(CalculatorState::default())
    }
}
