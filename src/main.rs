//! Subscription Calculator CLI
//!
//! Computes the practice dashboard and growth projection for a state file
//! (or the built-in seed state) and optionally writes the series to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use subscription_calculator::model::{load_segments, load_state, save_state};
use subscription_calculator::{CalculatorSession, CalculatorState};

#[derive(Parser, Debug)]
#[command(name = "subscription-calculator")]
#[command(about = "Financial projections for a subscription-based healthcare practice")]
struct Args {
    /// JSON state file (camelCase fields); defaults to the seed state
    #[arg(long)]
    state: Option<PathBuf>,

    /// CSV file of segments, replacing those in the state
    #[arg(long)]
    segments: Option<PathBuf>,

    /// Monthly fixed costs
    #[arg(long)]
    fixed_costs: Option<f64>,

    /// Industry valuation multiple
    #[arg(long)]
    industry_multiple: Option<f64>,

    /// Annual growth rate in percent
    #[arg(long, allow_hyphen_values = true)]
    growth_rate: Option<f64>,

    /// Number of months to project
    #[arg(long)]
    months: Option<u32>,

    /// Write the projection series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the effective state to this JSON file
    #[arg(long)]
    save_state: Option<PathBuf>,

    /// Print the full report as JSON instead of the dashboard
    #[arg(long)]
    json: bool,

    /// Projection rows to print
    #[arg(long, default_value = "24")]
    rows: usize,
}

fn build_state(args: &Args) -> Result<CalculatorState> {
    let mut state = match &args.state {
        Some(path) => load_state(path)
            .with_context(|| format!("Failed to load state from {}", path.display()))?,
        None => CalculatorState::default(),
    };

    if let Some(path) = &args.segments {
        state.segments = load_segments(path)
            .with_context(|| format!("Failed to load segments from {}", path.display()))?;
    }
    if let Some(fixed_costs) = args.fixed_costs {
        state.fixed_costs = fixed_costs;
    }
    if let Some(multiple) = args.industry_multiple {
        state.industry_multiple = multiple;
    }
    if let Some(rate) = args.growth_rate {
        state.projected_growth_rate = rate;
    }
    if let Some(months) = args.months {
        state.projection_months = months;
    }

    Ok(state)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let state = build_state(&args)?;
    if let Err(e) = state.validate() {
        warn!("{}; affected figures will show as N/A", e);
    }

    if let Some(path) = &args.save_state {
        save_state(path, &state)
            .with_context(|| format!("Failed to save state to {}", path.display()))?;
    }

    let session = CalculatorSession::new(state);
    let report = session.report();

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        report.projection.write_csv(BufWriter::new(file))?;
        info!("Projection written to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Subscription Calculator v{}", env!("CARGO_PKG_VERSION"));
    println!("============================\n");

    let state = session.state();
    println!("Fixed Costs: ${:.2}", state.fixed_costs);
    for segment in &state.segments {
        println!(
            "  {}: fee ${:.2}, {} new/month, {} months retention",
            segment.name,
            segment.subscription_fee,
            segment.new_patients_per_month,
            segment.average_retention_months
        );
    }
    println!();

    println!("Dashboard:");
    print!("{}", report);
    println!();

    println!("{}-Month Projection:", state.projection_months);
    println!("{:>5} {:>16} {:>16} {:>16}", "Month", "Revenue", "Costs", "Profit");
    println!("{}", "-".repeat(56));
    for point in report.projection.iter().take(args.rows) {
        println!(
            "{:>5} {:>16.2} {:>16.2} {:>16.2}",
            point.month, point.revenue, point.costs, point.profit
        );
    }
    if report.projection.len() > args.rows {
        println!("... ({} more months)", report.projection.len() - args.rows);
    }

    let summary = report.projection.summary();
    println!("\nSummary:");
    println!("  Total Months: {}", summary.total_months);
    println!("  Total Revenue: ${:.2}", summary.total_revenue);
    println!("  Total Costs: ${:.2}", summary.total_costs);
    println!("  Total Profit: ${:.2}", summary.total_profit);
    println!("  Final Monthly Profit: ${:.2}", summary.final_profit);

    Ok(())
}
