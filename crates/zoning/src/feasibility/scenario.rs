//! Scenario records produced by the enumerator.

use serde::Serialize;

use super::setback_bands::SetbackBand;
use super::zoning_table::{RoadWidth, ZoneType};

// =============================================================================
// PlotScenario
// =============================================================================

/// One setback band combined with one floor height.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotScenario {
    pub setback: f64,
    pub max_height: f64,
    pub floor_height: f64,
    pub max_floors: u32,
    pub setback_area_loss_percent: f64,
    pub buildable_area: f64,
    pub coverage_area: f64,
    pub total_far_area: f64,
    #[serde(rename = "farAllowed")]
    pub far_allowed: f64,
    #[serde(rename = "achievedFAR")]
    pub achieved_far: f64,
    pub far_utilization_percent: f64,
    pub height_achieved: f64,
    pub is_feasible: bool,
}

impl PlotScenario {
    /// Derives every figure of the scenario. `site_area` and `far_allowed`
    /// must be positive, and `floor_height` at least
    /// [`MIN_FLOOR_HEIGHT_M`](super::MIN_FLOOR_HEIGHT_M).
    pub fn evaluate(
        band: &SetbackBand,
        floor_height: f64,
        site_area: f64,
        plot_width: f64,
        plot_depth: f64,
        far_allowed: f64,
        coverage_area: f64,
    ) -> Self {
        let max_floors = (band.max_height / floor_height).floor() as u32;
        let buildable_area = band.buildable_area(plot_width, plot_depth);
        let setback_area_loss_percent = (site_area - buildable_area) / site_area * 100.0;
        let total_far_area = buildable_area * f64::from(max_floors);
        let achieved_far = total_far_area / site_area;
        let far_utilization_percent = achieved_far / far_allowed * 100.0;
        let height_achieved = f64::from(max_floors) * floor_height;

        PlotScenario {
            setback: band.setback,
            max_height: band.max_height,
            floor_height,
            max_floors,
            setback_area_loss_percent,
            buildable_area,
            coverage_area,
            total_far_area,
            far_allowed,
            achieved_far,
            far_utilization_percent,
            height_achieved,
            is_feasible: achieved_far <= far_allowed && height_achieved <= band.max_height,
        }
    }

    pub fn status(&self) -> ScenarioStatus {
        if self.is_feasible {
            ScenarioStatus::Feasible
        } else {
            ScenarioStatus::OverFar
        }
    }

    /// One-line summary used for the optimal option banner.
    pub fn describe(&self) -> String {
        format!(
            "Setback {:.1}m + {} floors ({:.2}m height per floor) = {:.2} FAR ({:.1}% utilization)",
            self.setback,
            self.max_floors,
            self.floor_height,
            self.achieved_far,
            self.far_utilization_percent
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStatus {
    Feasible,
    OverFar,
}

impl ScenarioStatus {
    pub fn label(self) -> &'static str {
        match self {
            ScenarioStatus::Feasible => "Feasible",
            ScenarioStatus::OverFar => "Over FAR",
        }
    }
}

// =============================================================================
// Summary / report
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilitySummary {
    pub zone_type: ZoneType,
    pub road_width: RoadWidth,
    pub far_allowed: f64,
    pub coverage_percent: u32,
    pub coverage_area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityReport {
    /// Band-major, floor-height-minor.
    pub scenarios: Vec<PlotScenario>,
    pub optimal_scenario: Option<PlotScenario>,
    pub summary: FeasibilitySummary,
}

impl FeasibilityReport {
    pub fn feasible(&self) -> impl Iterator<Item = &PlotScenario> {
        self.scenarios.iter().filter(|s| s.is_feasible)
    }

    pub fn optimal_description(&self) -> Option<String> {
        self.optimal_scenario.as_ref().map(PlotScenario::describe)
    }
}
