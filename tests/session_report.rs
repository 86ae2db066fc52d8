use approx::assert_relative_eq;
use subscription_calculator::model::{load_segments_from_reader, load_state_from_reader};
use subscription_calculator::{
    compute_metrics, estimate_exit_valuation, generate_projection, CalculatorSession, CalculatorState,
    Report, SegmentField,
};

const SEGMENTS_CSV: &str = "\
name,subscriptionFee,medicationCost,acquisitionCost,newPatientsPerMonth,averageRetentionMonths,initialNPVisitCost,ongoingNPVisitCost,monthsBetweenVisits
General,300,100,50,30,12,80,50,3
Chronic care,150,20,40,10,6,60,40,2
";

#[test]
fn test_csv_segments_through_report() {
    let state = CalculatorState {
        segments: load_segments_from_reader(SEGMENTS_CSV.as_bytes()).unwrap(),
        projected_growth_rate: 0.0,
        ..Default::default()
    };
    assert!(state.validate().is_ok());

    let report = Report::compute(&state);
    assert_eq!(report.results.monthly_revenue, 117_000.0);
    assert_eq!(report.results.monthly_costs, 45_900.0 + 3_400.0 + 5_000.0);
    assert_eq!(report.results.active_clients, 420.0);

    let expected_valuation = report.results.annual_revenue * 5.0 * 0.7
        + report.results.annual_profit * 5.0 * 1.5 * 0.3
        + 420.0 * 500.0;
    assert_relative_eq!(report.exit_valuation, expected_valuation, max_relative = 1e-12);

    for point in &report.projection {
        assert_eq!(point.revenue, report.results.monthly_revenue);
        assert_eq!(point.costs, report.results.monthly_costs);
    }
}

#[test]
fn test_engine_functions_match_report() {
    let state = CalculatorState::default();
    let results = compute_metrics(&state);
    let valuation = estimate_exit_valuation(
        results.annual_revenue,
        results.annual_profit,
        state.industry_multiple,
        state.projected_growth_rate,
        results.active_clients,
        state.projection_months,
    );
    let projection = generate_projection(&state, &results);

    let report = Report::compute(&state);
    assert_eq!(report.results, results);
    assert_eq!(report.exit_valuation, valuation);
    assert_eq!(report.projection, projection);
}

#[test]
fn test_session_edit_flow_and_csv_output() {
    let json = r#"{ "fixedCosts": 2000, "projectionMonths": 6, "projectedGrowthRate": 12 }"#;
    let mut session = CalculatorSession::new(load_state_from_reader(json.as_bytes()).unwrap());
    assert_eq!(session.state().segments.len(), 1);

    session.add_segment().unwrap();
    session.set_segment_name(1, "Chronic care").unwrap();
    for (field, value) in [
        (SegmentField::SubscriptionFee, "150"),
        (SegmentField::MedicationCost, "20"),
        (SegmentField::AcquisitionCost, "40"),
        (SegmentField::NewPatientsPerMonth, "10"),
        (SegmentField::AverageRetentionMonths, "6"),
        (SegmentField::InitialNpVisitCost, "60"),
        (SegmentField::OngoingNpVisitCost, "40"),
        (SegmentField::MonthsBetweenVisits, "2"),
    ] {
        session.set_segment_field(1, field, value).unwrap();
    }
    assert!(session.state().validate().is_ok());

    let report = session.report();
    assert_eq!(report.results.monthly_costs, 45_900.0 + 3_400.0 + 2_000.0);
    assert_eq!(report.projection.len(), 6);
    assert_relative_eq!(
        report.projection.points[0].revenue,
        117_000.0 * 1.01,
        max_relative = 1e-12
    );

    let mut buffer = Vec::new();
    report.projection.write_csv(&mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "month,revenue,costs,profit");
    assert!(lines[6].starts_with("6,"));
}

#[test]
fn test_empty_practice_does_not_panic() {
    let mut session = CalculatorSession::default();
    session.remove_segment(0).unwrap();

    let report = session.report();
    assert!(report.results.customer_acquisition_cost.is_nan());
    assert!(report.results.patient_lifetime_value.is_nan());
    assert!(report.exit_valuation.is_finite());
    assert!(report.to_string().contains("N/A"));
}
