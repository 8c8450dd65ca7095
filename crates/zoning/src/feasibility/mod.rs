//! FAR and setback feasibility enumerator.
//!
//! Sweeps every [`SetbackBand`] against every requested floor height, derives
//! buildable area, floor count and achieved FAR per combination, flags the
//! ones that stay within both the FAR allowance and the band height, and
//! picks the feasible scenario with the highest FAR utilization.
//!
//! Input is validated once by [`PlotRequest::validate`]; [`enumerate`] itself
//! cannot fail.

pub mod plot;
pub mod scenario;
pub mod setback_bands;
pub mod zoning_table;

pub use plot::{
    PlotInput, PlotRequest, DEFAULT_FLOOR_HEIGHTS, MAX_FLOOR_HEIGHT_OPTIONS, MIN_FLOOR_HEIGHT_M,
};
pub use scenario::{FeasibilityReport, FeasibilitySummary, PlotScenario, ScenarioStatus};
pub use setback_bands::{SetbackBand, SETBACK_BANDS};
pub use zoning_table::{zoning_entry, RoadWidth, ZoneType, ZoningEntry};

use tracing::debug;

/// Generates all scenarios for `plot` and selects the optimal one.
pub fn enumerate(plot: &PlotInput) -> FeasibilityReport {
    let entry = zoning_entry(plot.zone_type(), plot.road_width());
    let site_area = plot.site_area();
    let coverage_area = site_area * f64::from(entry.coverage_percent) / 100.0;

    let scenarios: Vec<PlotScenario> = SETBACK_BANDS
        .iter()
        .flat_map(|band| {
            plot.floor_heights().iter().map(move |&floor_height| {
                PlotScenario::evaluate(
                    band,
                    floor_height,
                    site_area,
                    plot.plot_width(),
                    plot.plot_depth(),
                    entry.far,
                    coverage_area,
                )
            })
        })
        .collect();

    let optimal_scenario = select_optimal(&scenarios).cloned();

    debug!(
        zone_type = plot.zone_type().key(),
        road_width = plot.road_width().metres(),
        scenarios = scenarios.len(),
        feasible = scenarios.iter().filter(|s| s.is_feasible).count(),
        optimal_utilization = ?optimal_scenario.as_ref().map(|s| s.far_utilization_percent),
        "enumerated feasibility scenarios"
    );

    FeasibilityReport {
        scenarios,
        optimal_scenario,
        summary: FeasibilitySummary {
            zone_type: plot.zone_type(),
            road_width: plot.road_width(),
            far_allowed: entry.far,
            coverage_percent: entry.coverage_percent,
            coverage_area,
        },
    }
}

/// First feasible scenario with strictly greater utilization than every
/// earlier one. Scenarios at zero utilization are never selected.
pub fn select_optimal(scenarios: &[PlotScenario]) -> Option<&PlotScenario> {
    let mut best: Option<&PlotScenario> = None;
    let mut max_utilization = 0.0;
    for scenario in scenarios.iter().filter(|s| s.is_feasible) {
        if scenario.far_utilization_percent > max_utilization {
            max_utilization = scenario.far_utilization_percent;
            best = Some(scenario);
        }
    }
    best
}

// =============================================================================
// Tests
// =============================================================================
