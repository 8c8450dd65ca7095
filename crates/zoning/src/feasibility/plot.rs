//! Plot request as received from the map layer, and its validated form.

use serde::{Deserialize, Serialize};

use super::zoning_table::{RoadWidth, ZoneType};
use crate::error::ValidationError;

/// The calculator offers at most this many floor height options.
pub const MAX_FLOOR_HEIGHT_OPTIONS: usize = 5;

/// Lowest floor-to-floor height accepted, in metres.
pub const MIN_FLOOR_HEIGHT_M: f64 = 2.0;

/// Floor heights pre-filled in the calculator form.
pub const DEFAULT_FLOOR_HEIGHTS: [f64; MAX_FLOOR_HEIGHT_OPTIONS] = [3.0, 3.3, 3.5, 3.75, 3.8];

fn default_floor_heights() -> Vec<f64> {
    DEFAULT_FLOOR_HEIGHTS.to_vec()
}

/// Unvalidated calculator input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotRequest {
    pub zone_type: ZoneType,
    pub road_width: f64,
    pub site_area: f64,
    pub plot_width: f64,
    pub plot_depth: f64,
    #[serde(default = "default_floor_heights")]
    pub floor_heights: Vec<f64>,
}

impl PlotRequest {
    pub fn validate(&self) -> Result<PlotInput, ValidationError> {
        let road_width = RoadWidth::from_metres(self.road_width)?;
        PlotInput::new(
            self.zone_type,
            road_width,
            self.site_area,
            self.plot_width,
            self.plot_depth,
            self.floor_heights.clone(),
        )
    }
}

/// Calculator input that satisfies every precondition of
/// [`enumerate`](super::enumerate): positive site area, non-negative plot
/// dimensions, and one to five floor heights of at least
/// [`MIN_FLOOR_HEIGHT_M`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotInput {
    zone_type: ZoneType,
    road_width: RoadWidth,
    site_area: f64,
    plot_width: f64,
    plot_depth: f64,
    floor_heights: Vec<f64>,
}

fn check_dimension(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidPlotDimension { field, value })
    }
}

impl PlotInput {
    pub fn new(
        zone_type: ZoneType,
        road_width: RoadWidth,
        site_area: f64,
        plot_width: f64,
        plot_depth: f64,
        floor_heights: Vec<f64>,
    ) -> Result<Self, ValidationError> {
        if !(site_area.is_finite() && site_area > 0.0) {
            return Err(ValidationError::NonPositiveSiteArea(site_area));
        }
        let plot_width = check_dimension("width", plot_width)?;
        let plot_depth = check_dimension("depth", plot_depth)?;

        if floor_heights.is_empty() {
            return Err(ValidationError::NoFloorHeights);
        }
        if floor_heights.len() > MAX_FLOOR_HEIGHT_OPTIONS {
            return Err(ValidationError::TooManyFloorHeights {
                max: MAX_FLOOR_HEIGHT_OPTIONS,
                found: floor_heights.len(),
            });
        }
        if let Some(&bad) = floor_heights
            .iter()
            .find(|h| !(h.is_finite() && **h > 0.0))
        {
            return Err(ValidationError::NonPositiveFloorHeight(bad));
        }
        if let Some(&low) = floor_heights.iter().find(|&&h| h < MIN_FLOOR_HEIGHT_M) {
            return Err(ValidationError::FloorHeightBelowMinimum {
                min: MIN_FLOOR_HEIGHT_M,
                value: low,
            });
        }

        Ok(PlotInput {
            zone_type,
            road_width,
            site_area,
            plot_width,
            plot_depth,
            floor_heights,
        })
    }

    pub fn zone_type(&self) -> ZoneType {
        self.zone_type
    }

    pub fn road_width(&self) -> RoadWidth {
        self.road_width
    }

    pub fn site_area(&self) -> f64 {
        self.site_area
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_width
    }

    pub fn plot_depth(&self) -> f64 {
        self.plot_depth
    }

    pub fn floor_heights(&self) -> &[f64] {
        &self.floor_heights
    }
}
