//! Load calculator state from JSON and segments from CSV

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::Reader;
use log::info;

use super::{CalculatorState, Segment};
use crate::error::Result;

/// Raw CSV row; the name column is optional
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "subscriptionFee")]
    subscription_fee: f64,
    #[serde(rename = "medicationCost")]
    medication_cost: f64,
    #[serde(rename = "acquisitionCost")]
    acquisition_cost: f64,
    #[serde(rename = "newPatientsPerMonth")]
    new_patients_per_month: f64,
    #[serde(rename = "averageRetentionMonths")]
    average_retention_months: f64,
    #[serde(rename = "initialNPVisitCost")]
    initial_np_visit_cost: f64,
    #[serde(rename = "ongoingNPVisitCost")]
    ongoing_np_visit_cost: f64,
    #[serde(rename = "monthsBetweenVisits")]
    months_between_visits: f64,
}

impl CsvRow {
    fn into_segment(self, number: usize) -> Segment {
        Segment {
            name: self
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| format!("Segment {}", number)),
            subscription_fee: self.subscription_fee,
            medication_cost: self.medication_cost,
            acquisition_cost: self.acquisition_cost,
            new_patients_per_month: self.new_patients_per_month,
            average_retention_months: self.average_retention_months,
            initial_np_visit_cost: self.initial_np_visit_cost,
            ongoing_np_visit_cost: self.ongoing_np_visit_cost,
            months_between_visits: self.months_between_visits,
        }
    }
}

/// Load segments from a CSV file
pub fn load_segments<P: AsRef<Path>>(path: P) -> Result<Vec<Segment>> {
    let file = File::open(path.as_ref())?;
    let segments = load_segments_from_reader(file)?;
    info!("Loaded {} segments from {}", segments.len(), path.as_ref().display());
    Ok(segments)
}

/// Load segments from any reader (e.g., string buffer)
pub fn load_segments_from_reader<R: Read>(reader: R) -> Result<Vec<Segment>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut segments = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        segments.push(row.into_segment(segments.len() + 1));
    }

    Ok(segments)
}

/// Load a full state from a JSON file
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<CalculatorState> {
    let file = File::open(path.as_ref())?;
    let state = load_state_from_reader(BufReader::new(file))?;
    info!(
        "Loaded state with {} segments from {}",
        state.segments.len(),
        path.as_ref().display()
    );
    Ok(state)
}

/// Load a full state from JSON; missing fields take the seed values
pub fn load_state_from_reader<R: Read>(reader: R) -> Result<CalculatorState> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write a state as pretty JSON
pub fn save_state<P: AsRef<Path>>(path: P, state: &CalculatorState) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(&mut writer, state)?;
    writer.flush()?;
    info!("Saved state to {}", path.as_ref().display());
    Ok(())
}
