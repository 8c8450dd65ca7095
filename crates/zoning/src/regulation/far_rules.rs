//! Base FAR, ground coverage and premium FAR rule tables per zone.
//!
//! Every table is a step function evaluated top to bottom with inclusive
//! upper bounds: a value exactly on a threshold takes the lower bracket.

use crate::zones::ZoneClassification;

// =============================================================================
// Brackets
// =============================================================================

/// One row of a step table: values `<= upto` get this FAR and coverage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub upto: f64,
    pub far: f64,
    pub coverage_percent: u32,
}

const fn bracket(upto: f64, far: f64, coverage_percent: u32) -> Bracket {
    Bracket {
        upto,
        far,
        coverage_percent,
    }
}

/// Walks `brackets` in order; falls through to `above` past the last row.
fn step(value: f64, brackets: &[Bracket], above: (f64, u32)) -> (f64, u32) {
    brackets
        .iter()
        .find(|b| value <= b.upto)
        .map_or(above, |b| (b.far, b.coverage_percent))
}

// Road width brackets (m). Coverage is unused for residential-main road FAR.
const RESIDENTIAL_MAIN_BY_ROAD: [Bracket; 4] = [
    bracket(12.0, 1.75, 0),
    bracket(18.0, 2.25, 0),
    bracket(24.0, 2.50, 0),
    bracket(30.0, 3.00, 0),
];
const RESIDENTIAL_MAIN_ABOVE_ROAD: (f64, u32) = (3.25, 0);

const RESIDENTIAL_MAIN_BY_AREA: [Bracket; 4] = [
    bracket(360.0, 1.75, 75),
    bracket(1000.0, 2.25, 65),
    bracket(2000.0, 2.50, 60),
    bracket(4000.0, 3.00, 55),
];
const RESIDENTIAL_MAIN_ABOVE_AREA: (f64, u32) = (3.25, 50);

const RESIDENTIAL_MIXED_BY_ROAD: [Bracket; 4] = [
    bracket(12.0, 1.75, 70),
    bracket(18.0, 2.25, 65),
    bracket(24.0, 2.50, 60),
    bracket(30.0, 3.00, 55),
];
const RESIDENTIAL_MIXED_ABOVE: (f64, u32) = (3.25, 50);

const COMMERCIAL_BUSINESS_BY_ROAD: [Bracket; 4] = [
    bracket(12.0, 1.75, 50),
    bracket(18.0, 2.25, 50),
    bracket(24.0, 2.50, 45),
    bracket(30.0, 3.00, 40),
];
const COMMERCIAL_BUSINESS_ABOVE: (f64, u32) = (3.25, 40);

const INDUSTRIAL_GENERAL_BY_AREA: [Bracket; 3] = [
    bracket(500.0, 1.50, 75),
    bracket(1000.0, 1.25, 60),
    bracket(3000.0, 1.00, 50),
];
const INDUSTRIAL_GENERAL_ABOVE: (f64, u32) = (1.00, 45);

const INDUSTRIAL_HITECH_BY_AREA: [Bracket; 4] = [
    bracket(1000.0, 2.00, 55),
    bracket(2000.0, 2.25, 50),
    bracket(4000.0, 2.50, 50),
    bracket(6000.0, 3.00, 45),
];
const INDUSTRIAL_HITECH_ABOVE: (f64, u32) = (3.25, 45);

const PUBLIC_SEMI_PUBLIC_BY_AREA: [Bracket; 3] = [
    bracket(500.0, 1.50, 60),
    bracket(1000.0, 1.75, 55),
    bracket(2000.0, 2.00, 50),
];
const PUBLIC_SEMI_PUBLIC_ABOVE: (f64, u32) = (2.25, 45);

const TRAFFIC_TRANSPORT_BY_AREA: [Bracket; 2] = [
    bracket(500.0, 1.00, 60),
    bracket(1000.0, 1.25, 55),
];
const TRAFFIC_TRANSPORT_ABOVE: (f64, u32) = (1.50, 50);

// =============================================================================
// Constants
// =============================================================================

pub const COMMERCIAL_CENTRAL_FAR: f64 = 2.50;
pub const COMMERCIAL_CENTRAL_COVERAGE: u32 = 75;
/// Commercial-central FAR once the road is wider than [`COMMERCIAL_CENTRAL_WIDE_ROAD_M`].
pub const COMMERCIAL_CENTRAL_WIDE_ROAD_FAR: f64 = 3.00;
pub const COMMERCIAL_CENTRAL_WIDE_ROAD_M: f64 = 18.0;

/// Plots strictly below this area get the lower mutation-corridor allowance.
pub const MUTATION_CORRIDOR_AREA_THRESHOLD: f64 = 10_000.0;

pub const OPEN_LAND_FAR: f64 = 0.5;
pub const OPEN_LAND_COVERAGE: u32 = 5;

/// Below this road width residential-main plots carry a height restriction.
pub const NARROW_ROAD_M: f64 = 9.0;
pub const NARROW_ROAD_NOTE: &str = "Road < 9m: Max Height 11.5m. No Apartments.";

/// Premium FAR is only granted on roads wider than this.
pub const PREMIUM_MIN_ROAD_M: f64 = 9.0;
const PREMIUM_BY_ROAD: [(f64, f64); 2] = [(12.0, 0.20), (18.0, 0.40)];
const PREMIUM_ABOVE: f64 = 0.60;

// =============================================================================
// Allowance
// =============================================================================

/// Base allowance of a zone before premium FAR is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseAllowance {
    pub far: f64,
    pub coverage_percent: u32,
    pub restriction_note: Option<&'static str>,
}

impl BaseAllowance {
    pub const NONE: BaseAllowance = BaseAllowance {
        far: 0.0,
        coverage_percent: 0,
        restriction_note: None,
    };

    fn from_pair((far, coverage_percent): (f64, u32)) -> Self {
        BaseAllowance {
            far,
            coverage_percent,
            restriction_note: None,
        }
    }
}

/// Base FAR and ground coverage for a plot of `area` sqm on a road of
/// `road` metres. Zones without a rule branch get [`BaseAllowance::NONE`].
pub fn base_allowance(zone: ZoneClassification, area: f64, road: f64) -> BaseAllowance {
    match zone {
        ZoneClassification::ResidentialMain => {
            let (road_far, _) = step(road, &RESIDENTIAL_MAIN_BY_ROAD, RESIDENTIAL_MAIN_ABOVE_ROAD);
            let (plot_far, coverage_percent) =
                step(area, &RESIDENTIAL_MAIN_BY_AREA, RESIDENTIAL_MAIN_ABOVE_AREA);
            BaseAllowance {
                far: road_far.min(plot_far),
                coverage_percent,
                restriction_note: (road < NARROW_ROAD_M).then_some(NARROW_ROAD_NOTE),
            }
        }
        ZoneClassification::ResidentialMixed => BaseAllowance::from_pair(step(
            road,
            &RESIDENTIAL_MIXED_BY_ROAD,
            RESIDENTIAL_MIXED_ABOVE,
        )),
        ZoneClassification::CommercialCentral => {
            let far = if road > COMMERCIAL_CENTRAL_WIDE_ROAD_M {
                COMMERCIAL_CENTRAL_WIDE_ROAD_FAR
            } else {
                COMMERCIAL_CENTRAL_FAR
            };
            BaseAllowance::from_pair((far, COMMERCIAL_CENTRAL_COVERAGE))
        }
        ZoneClassification::CommercialBusiness => BaseAllowance::from_pair(step(
            road,
            &COMMERCIAL_BUSINESS_BY_ROAD,
            COMMERCIAL_BUSINESS_ABOVE,
        )),
        ZoneClassification::MutationCorridor => {
            if area < MUTATION_CORRIDOR_AREA_THRESHOLD {
                BaseAllowance::from_pair((2.75, 55))
            } else {
                BaseAllowance::from_pair((3.25, 50))
            }
        }
        ZoneClassification::IndustrialGeneral => BaseAllowance::from_pair(step(
            area,
            &INDUSTRIAL_GENERAL_BY_AREA,
            INDUSTRIAL_GENERAL_ABOVE,
        )),
        ZoneClassification::IndustrialHitech => BaseAllowance::from_pair(step(
            area,
            &INDUSTRIAL_HITECH_BY_AREA,
            INDUSTRIAL_HITECH_ABOVE,
        )),
        ZoneClassification::PublicSemiPublic => BaseAllowance::from_pair(step(
            area,
            &PUBLIC_SEMI_PUBLIC_BY_AREA,
            PUBLIC_SEMI_PUBLIC_ABOVE,
        )),
        ZoneClassification::TrafficTransport => BaseAllowance::from_pair(step(
            area,
            &TRAFFIC_TRANSPORT_BY_AREA,
            TRAFFIC_TRANSPORT_ABOVE,
        )),
        ZoneClassification::ParkOpen | ZoneClassification::Agricultural => {
            BaseAllowance::from_pair((OPEN_LAND_FAR, OPEN_LAND_COVERAGE))
        }
        // No rule branch in the master plan tables.
        ZoneClassification::CommercialAxes
        | ZoneClassification::PublicUtility
        | ZoneClassification::Unclassified => BaseAllowance::NONE,
    }
}

/// Premium FAR on top of `base_far`, bracketed by road width.
pub fn premium_far(zone: ZoneClassification, base_far: f64, road: f64) -> f64 {
    if road <= PREMIUM_MIN_ROAD_M || base_far <= 0.0 || zone.excludes_premium() {
        return 0.0;
    }
    PREMIUM_BY_ROAD
        .iter()
        .find(|(upto, _)| road <= *upto)
        .map_or(PREMIUM_ABOVE, |(_, premium)| *premium)
}

// =============================================================================
// Tests
// =============================================================================
