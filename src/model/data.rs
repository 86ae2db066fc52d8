//! Practice input data: patient segments and the full calculator state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, Result};

/// Upper bound on segments a practice may hold (enforced by the session, not the engine)
pub const MAX_SEGMENTS: usize = 5;

/// Projection length used when the month input cannot be parsed
pub const DEFAULT_PROJECTION_MONTHS: u32 = 24;

/// One homogeneous group of patients sharing pricing and cost structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Display name, not used in arithmetic
    pub name: String,

    /// Subscription fee per client per month
    pub subscription_fee: f64,

    /// Medication cost per client per month
    pub medication_cost: f64,

    /// Acquisition cost per new client
    pub acquisition_cost: f64,

    /// New patients enrolled per month
    pub new_patients_per_month: f64,

    /// Average months a client stays subscribed
    pub average_retention_months: f64,

    /// Cost of the initial nurse practitioner visit per new client
    #[serde(rename = "initialNPVisitCost")]
    pub initial_np_visit_cost: f64,

    /// Cost of each ongoing nurse practitioner visit
    #[serde(rename = "ongoingNPVisitCost")]
    pub ongoing_np_visit_cost: f64,

    /// Months between ongoing visits (divisor, must be non-zero)
    pub months_between_visits: f64,
}

impl Segment {
    /// Segment as added from the input form: numbered name, every amount zero
    pub fn blank(number: usize) -> Self {
        Self {
            name: format!("Segment {}", number),
            subscription_fee: 0.0,
            medication_cost: 0.0,
            acquisition_cost: 0.0,
            new_patients_per_month: 0.0,
            average_retention_months: 0.0,
            initial_np_visit_cost: 0.0,
            ongoing_np_visit_cost: 0.0,
            months_between_visits: 0.0,
        }
    }

    /// Read a numeric field
    pub fn get(&self, field: SegmentField) -> f64 {
        match field {
            SegmentField::SubscriptionFee => self.subscription_fee,
            SegmentField::MedicationCost => self.medication_cost,
            SegmentField::AcquisitionCost => self.acquisition_cost,
            SegmentField::NewPatientsPerMonth => self.new_patients_per_month,
            SegmentField::AverageRetentionMonths => self.average_retention_months,
            SegmentField::InitialNpVisitCost => self.initial_np_visit_cost,
            SegmentField::OngoingNpVisitCost => self.ongoing_np_visit_cost,
            SegmentField::MonthsBetweenVisits => self.months_between_visits,
        }
    }

    /// Overwrite a numeric field
    pub fn set(&mut self, field: SegmentField, value: f64) {
        let slot = match field {
            SegmentField::SubscriptionFee => &mut self.subscription_fee,
            SegmentField::MedicationCost => &mut self.medication_cost,
            SegmentField::AcquisitionCost => &mut self.acquisition_cost,
            SegmentField::NewPatientsPerMonth => &mut self.new_patients_per_month,
            SegmentField::AverageRetentionMonths => &mut self.average_retention_months,
            SegmentField::InitialNpVisitCost => &mut self.initial_np_visit_cost,
            SegmentField::OngoingNpVisitCost => &mut self.ongoing_np_visit_cost,
            SegmentField::MonthsBetweenVisits => &mut self.months_between_visits,
        };
        *slot = value;
    }
}

/// Numeric fields of a segment, in input-form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentField {
    SubscriptionFee,
    MedicationCost,
    AcquisitionCost,
    NewPatientsPerMonth,
    AverageRetentionMonths,
    InitialNpVisitCost,
    OngoingNpVisitCost,
    MonthsBetweenVisits,
}

impl SegmentField {
    pub const ALL: [SegmentField; 8] = [
        SegmentField::SubscriptionFee,
        SegmentField::MedicationCost,
        SegmentField::AcquisitionCost,
        SegmentField::NewPatientsPerMonth,
        SegmentField::AverageRetentionMonths,
        SegmentField::InitialNpVisitCost,
        SegmentField::OngoingNpVisitCost,
        SegmentField::MonthsBetweenVisits,
    ];

    /// Key used in state files and CSV headers
    pub fn key(&self) -> &'static str {
        match self {
            SegmentField::SubscriptionFee => "subscriptionFee",
            SegmentField::MedicationCost => "medicationCost",
            SegmentField::AcquisitionCost => "acquisitionCost",
            SegmentField::NewPatientsPerMonth => "newPatientsPerMonth",
            SegmentField::AverageRetentionMonths => "averageRetentionMonths",
            SegmentField::InitialNpVisitCost => "initialNPVisitCost",
            SegmentField::OngoingNpVisitCost => "ongoingNPVisitCost",
            SegmentField::MonthsBetweenVisits => "monthsBetweenVisits",
        }
    }

    /// Human-readable label, e.g. "Initial N P Visit Cost"
    pub fn label(&self) -> String {
        let mut label = String::new();
        for (i, c) in self.key().chars().enumerate() {
            if i == 0 {
                label.extend(c.to_uppercase());
            } else {
                if c.is_ascii_uppercase() {
                    label.push(' ');
                }
                label.push(c);
            }
        }
        label
    }
}

impl fmt::Display for SegmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SegmentField {
    type Err = CalculatorError;

    /// Accepts the state-file key in any case, with or without separators
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        SegmentField::ALL
            .iter()
            .copied()
            .find(|field| field.key().to_ascii_lowercase() == wanted)
            .ok_or_else(|| CalculatorError::UnknownField(s.to_string()))
    }
}

/// Full input aggregate for one computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorState {
    /// Practice-wide monthly overhead
    pub fixed_costs: f64,

    /// Patient segments; order is irrelevant to the arithmetic
    pub segments: Vec<Segment>,

    /// Valuation multiplier
    pub industry_multiple: f64,

    /// Annual growth rate, in percent
    pub projected_growth_rate: f64,

    /// Number of months to project
    pub projection_months: u32,
}

impl Default for CalculatorState {
    /// First-run seed values
    fn default() -> Self {
        Self {
            fixed_costs: 5000.0,
            segments: vec![Segment {
                name: "Segment 1".to_string(),
                subscription_fee: 300.0,
                medication_cost: 100.0,
                acquisition_cost: 50.0,
                new_patients_per_month: 30.0,
                average_retention_months: 12.0,
                initial_np_visit_cost: 80.0,
                ongoing_np_visit_cost: 50.0,
                months_between_visits: 3.0,
            }],
            industry_multiple: 5.0,
            projected_growth_rate: 10.0,
            projection_months: DEFAULT_PROJECTION_MONTHS,
        }
    }
}

impl CalculatorState {
    /// Check the inputs the engine divides by.
    ///
    /// The engine accepts any state and yields non-finite values where these
    /// checks fail; callers use this to explain an "N/A" before computing.
    pub fn validate(&self) -> Result<()> {
        if self.segments.is_empty() {
            return Err(CalculatorError::EmptySegments);
        }
        if self.segments.len() > MAX_SEGMENTS {
            return Err(CalculatorError::SegmentLimit { max: MAX_SEGMENTS });
        }
        if let Some(segment) = self.segments.iter().find(|s| s.months_between_visits == 0.0) {
            return Err(CalculatorError::ZeroVisitInterval {
                segment: segment.name.clone(),
            });
        }
        if self.total_new_patients() == 0.0 {
            return Err(CalculatorError::NoNewPatients);
        }
        if self.projection_months == 0 {
            return Err(CalculatorError::ZeroProjectionMonths);
        }
        Ok(())
    }

    /// Total new patients per month across all segments
    pub fn total_new_patients(&self) -> f64 {
        self.segments.iter().map(|s| s.new_patients_per_month).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_valid() {
        let state = CalculatorState::default();
        assert!(state.validate().is_ok());
        assert_eq!(state.segments.len(), 1);
        assert_eq!(state.projection_months, 24);
    }

    #[test]
    fn test_validate_reports_zero_visit_interval() {
        let mut state = CalculatorState::default();
        state.segments.push(Segment::blank(2));
        state.segments[1].new_patients_per_month = 5.0;

        match state.validate() {
            Err(CalculatorError::ZeroVisitInterval { segment }) => assert_eq!(segment, "Segment 2"),
            other => panic!("unexpected validation result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_and_limit() {
        let mut state = CalculatorState::default();
        state.segments.clear();
        assert!(matches!(state.validate(), Err(CalculatorError::EmptySegments)));

        state.segments = vec![CalculatorState::default().segments[0].clone(); 6];
        assert!(matches!(state.validate(), Err(CalculatorError::SegmentLimit { max: 5 })));
    }

    #[test]
    fn test_field_labels_and_parsing() {
        assert_eq!(SegmentField::SubscriptionFee.label(), "Subscription Fee");
        assert_eq!(SegmentField::InitialNpVisitCost.label(), "Initial N P Visit Cost");
        assert_eq!(
            "months-between-visits".parse::<SegmentField>().unwrap(),
            SegmentField::MonthsBetweenVisits
        );
        assert_eq!("initialNPVisitCost".parse::<SegmentField>().unwrap(), SegmentField::InitialNpVisitCost);
        assert!("discount".parse::<SegmentField>().is_err());
    }

    #[test]
    fn test_get_set_round_trip_every_field() {
        let mut segment = Segment::blank(1);
        for (i, field) in SegmentField::ALL.iter().enumerate() {
            segment.set(*field, i as f64 + 1.0);
        }
        assert_eq!(segment.subscription_fee, 1.0);
        assert_eq!(segment.months_between_visits, 8.0);
        assert_eq!(segment.get(SegmentField::NewPatientsPerMonth), 4.0);
    }
}
