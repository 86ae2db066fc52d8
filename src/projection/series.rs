//! Projection output: one point per month plus summary statistics

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single month of projected revenue, costs and profit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Projection month, starting at 1
    pub month: u32,
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
}

/// Complete projection, ordered by month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn with_capacity(months: usize) -> Self {
        Self {
            points: Vec::with_capacity(months),
        }
    }

    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: f64 = self.points.iter().map(|p| p.revenue).sum();
        let total_costs: f64 = self.points.iter().map(|p| p.costs).sum();
        let total_profit: f64 = self.points.iter().map(|p| p.profit).sum();

        let last = self.points.last();

        ProjectionSummary {
            total_months: self.points.len() as u32,
            total_revenue,
            total_costs,
            total_profit,
            final_revenue: last.map(|p| p.revenue).unwrap_or(0.0),
            final_costs: last.map(|p| p.costs).unwrap_or(0.0),
            final_profit: last.map(|p| p.profit).unwrap_or(0.0),
        }
    }

    /// Write the series as CSV with a `month,revenue,costs,profit` header
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for point in &self.points {
            csv_writer.serialize(point)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,
    pub final_revenue: f64,
    pub final_costs: f64,
    pub final_profit: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: u32, revenue: f64, costs: f64) -> ProjectionPoint {
        ProjectionPoint {
            month,
            revenue,
            costs,
            profit: revenue - costs,
        }
    }

    #[test]
    fn test_summary_totals_and_final_values() {
        let mut series = ProjectionSeries::with_capacity(2);
        series.add_point(point(1, 100.0, 60.0));
        series.add_point(point(2, 110.0, 66.0));

        let summary = series.summary();
        assert_eq!(summary.total_months, 2);
        assert_eq!(summary.total_revenue, 210.0);
        assert_eq!(summary.total_costs, 126.0);
        assert_eq!(summary.total_profit, 84.0);
        assert_eq!(summary.final_profit, 44.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionSeries::default().summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.final_revenue, 0.0);
    }

    #[test]
    fn test_write_csv() {
        let mut series = ProjectionSeries::default();
        series.add_point(point(1, 100.5, 60.25));

        let mut buffer = Vec::new();
        series.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text, "month,revenue,costs,profit\n1,100.5,60.25,40.25\n");
    }
}
