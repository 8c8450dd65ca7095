//! End-to-end checks of the resolver and the enumerator against worked
//! examples from the master plan tables.
//!
//! Run: cargo test -p zoning --test calculator_scenarios

use zoning::feasibility::{enumerate, PlotRequest, ZoneType, SETBACK_BANDS};
use zoning::regulation::{resolve, RegulationInput, Setbacks};
use zoning::ValidationError;

fn regulation(zone: &str, area: f64, frontage: f64, road: f64, height: f64) -> RegulationInput {
    RegulationInput {
        zone: zone.to_string(),
        area_sqm: area,
        frontage_m: frontage,
        road_width_m: road,
        building_height_m: height,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ---------------------------------------------------------------------------
// Regulation resolver
// ---------------------------------------------------------------------------

#[test]
fn test_residential_main_500sqm_on_18m_road() {
    let out = resolve(&regulation("residential_main", 500.0, 20.0, 18.0, 0.0));
    assert!(approx(out.base_far, 2.25));
    assert_eq!(out.coverage_percent, 65);
    assert!(approx(out.premium_far, 0.40));
    assert!(approx(out.total_far, 2.65));
}

#[test]
fn test_park_on_30m_road() {
    let out = resolve(&regulation("park_open", 1000.0, 20.0, 30.0, 0.0));
    assert!(approx(out.base_far, 0.5));
    assert_eq!(out.coverage_percent, 5);
    assert_eq!(out.premium_far, 0.0);
    assert!(approx(out.total_far, 0.5));
}

#[test]
fn test_small_low_rise_plot_setbacks() {
    let out = resolve(&regulation("residential_mixed", 100.0, 10.0, 12.0, 10.0));
    assert_eq!(out.setbacks.front, "0.90 m");
    assert_eq!(out.setbacks.rear, "0.70 m");
    assert_eq!(out.setbacks.side, "0.70 m (one side)");
    assert_eq!(out.setbacks.rule_used, "Table 8 (2025 Draft): Area-based");
}

#[test]
fn test_tall_building_uses_high_rise_table() {
    let out = resolve(&regulation("commercial_central", 2000.0, 40.0, 24.0, 28.0));
    assert!(approx(out.base_far, 3.0));
    assert!(approx(out.total_far, 3.6));
    assert_eq!(out.setbacks.front, "10.00 m");
    assert_eq!(out.setbacks.side, "10.00 m");
    assert_eq!(out.setbacks.rule_used, "Table 9 (High Rise)");
}

#[test]
fn test_zero_area_is_degenerate() {
    let out = resolve(&regulation("industrial_general", 0.0, 10.0, 24.0, 10.0));
    assert_eq!(out.base_far, 0.0);
    assert_eq!(out.coverage_percent, 0);
    assert_eq!(out.premium_far, 0.0);
    assert_eq!(out.setbacks, Setbacks::none());
}

// ---------------------------------------------------------------------------
// Feasibility enumerator
// ---------------------------------------------------------------------------

fn commercial_request(site_area: f64) -> PlotRequest {
    PlotRequest {
        zone_type: ZoneType::Commercial,
        road_width: 24.0,
        site_area,
        plot_width: 25.0,
        plot_depth: 40.0,
        floor_heights: vec![3.0, 3.5],
    }
}

#[test]
fn test_commercial_24m_study() {
    let report = enumerate(&commercial_request(1000.0).validate().unwrap());
    assert_eq!(report.summary.far_allowed, 3.0);
    assert_eq!(report.summary.coverage_percent, 60);
    assert_eq!(report.scenarios.len(), SETBACK_BANDS.len() * 2);

    let optimal = report.optimal_scenario.as_ref().unwrap();
    assert!(optimal.is_feasible);
    let best = report
        .feasible()
        .map(|s| s.far_utilization_percent)
        .fold(0.0, f64::max);
    assert_eq!(optimal.far_utilization_percent, best);
    assert_eq!(
        report.optimal_description().unwrap(),
        "Setback 5.0m + 5 floors (3.00m height per floor) = 2.25 FAR (75.0% utilization)"
    );
}

#[test]
fn test_zero_site_area_is_rejected() {
    assert_eq!(
        commercial_request(0.0).validate(),
        Err(ValidationError::NonPositiveSiteArea(0.0))
    );
}

#[test]
fn test_untabulated_road_width_is_rejected() {
    let mut request = commercial_request(1000.0);
    request.road_width = 15.0;
    let err = request.validate().unwrap_err();
    assert_eq!(err, ValidationError::UnsupportedRoadWidth(15.0));
    assert!(err.to_string().contains("12, 18, 24, 30, 40"));
}

#[test]
fn test_report_json_shape() {
    let report = enumerate(&commercial_request(1000.0).validate().unwrap());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["scenarios"].as_array().unwrap().len(), 22);
    assert_eq!(json["summary"]["zoneType"], "commercial");
    assert_eq!(json["summary"]["roadWidth"], 24);
    assert!(json["optimalScenario"].is_object());
}
