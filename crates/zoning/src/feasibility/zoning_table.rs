//! Coarse zone types and road width brackets keying the feasibility table.
//!
//! This is the table behind the FAR and setback feasibility calculator. It
//! is keyed by a three-way [`ZoneType`] and one of five tabulated road
//! widths, and is unrelated to the finer
//! [`ZoneClassification`](crate::zones::ZoneClassification) used by the
//! regulation resolver. Never convert between the two.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// ZoneType
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneType {
    Commercial,
    ResidentialMain,
    ResidentialMixed,
}

impl ZoneType {
    pub const ALL: [ZoneType; 3] = [
        ZoneType::Commercial,
        ZoneType::ResidentialMain,
        ZoneType::ResidentialMixed,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ZoneType::Commercial => "commercial",
            ZoneType::ResidentialMain => "residential_main",
            ZoneType::ResidentialMixed => "residential_mixed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoneType::Commercial => "Commercial Business",
            ZoneType::ResidentialMain => "Residential Main",
            ZoneType::ResidentialMixed => "Residential Mixed",
        }
    }
}

// =============================================================================
// RoadWidth
// =============================================================================

/// Tabulated road width brackets, named by their upper bound in metres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadWidth {
    M12,
    M18,
    M24,
    M30,
    M40,
}

impl RoadWidth {
    pub const ALL: [RoadWidth; 5] = [
        RoadWidth::M12,
        RoadWidth::M18,
        RoadWidth::M24,
        RoadWidth::M30,
        RoadWidth::M40,
    ];

    pub fn metres(self) -> u32 {
        match self {
            RoadWidth::M12 => 12,
            RoadWidth::M18 => 18,
            RoadWidth::M24 => 24,
            RoadWidth::M30 => 30,
            RoadWidth::M40 => 40,
        }
    }

    /// Matches `metres` exactly against the tabulated widths.
    pub fn from_metres(metres: f64) -> Result<Self, ValidationError> {
        RoadWidth::ALL
            .iter()
            .copied()
            .find(|w| f64::from(w.metres()) == metres)
            .ok_or(ValidationError::UnsupportedRoadWidth(metres))
    }

    /// Selector label shown next to the bracket.
    pub fn label(self) -> &'static str {
        match self {
            RoadWidth::M12 => "Up to 12 m",
            RoadWidth::M18 => "Above 12 m - 18 m",
            RoadWidth::M24 => "Above 18 m - 24 m",
            RoadWidth::M30 => "Above 24 m - 30 m",
            RoadWidth::M40 => "Above 30 m",
        }
    }
}

impl Serialize for RoadWidth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.metres())
    }
}

/// One entry of the road width selector.
#[derive(Debug, Clone, Serialize)]
pub struct RoadWidthInfo {
    pub metres: u32,
    pub label: &'static str,
}

pub fn road_width_brackets() -> Vec<RoadWidthInfo> {
    RoadWidth::ALL
        .iter()
        .map(|&w| RoadWidthInfo {
            metres: w.metres(),
            label: w.label(),
        })
        .collect()
}

// =============================================================================
// Table
// =============================================================================

/// Permissible FAR and ground coverage for one table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoningEntry {
    pub far: f64,
    pub coverage_percent: u32,
}

const fn entry(far: f64, coverage_percent: u32) -> ZoningEntry {
    ZoningEntry {
        far,
        coverage_percent,
    }
}

/// Rows follow [`RoadWidth::ALL`].
const COMMERCIAL: [ZoningEntry; 5] = [
    entry(1.75, 75),
    entry(2.5, 65),
    entry(3.0, 60),
    entry(3.25, 50),
    entry(3.35, 50),
];

const RESIDENTIAL_MAIN: [ZoningEntry; 5] = [
    entry(1.75, 75),
    entry(2.0, 70),
    entry(2.25, 65),
    entry(2.5, 60),
    entry(2.5, 60),
];

const RESIDENTIAL_MIXED: [ZoningEntry; 5] = [
    entry(2.0, 65),
    entry(2.5, 60),
    entry(2.75, 55),
    entry(3.0, 50),
    entry(3.0, 50),
];

/// Table lookup. Total over its typed key space.
pub fn zoning_entry(zone: ZoneType, road: RoadWidth) -> ZoningEntry {
    let row = match zone {
        ZoneType::Commercial => &COMMERCIAL,
        ZoneType::ResidentialMain => &RESIDENTIAL_MAIN,
        ZoneType::ResidentialMixed => &RESIDENTIAL_MIXED,
    };
    let column = match road {
        RoadWidth::M12 => 0,
        RoadWidth::M18 => 1,
        RoadWidth::M24 => 2,
        RoadWidth::M30 => 3,
        RoadWidth::M40 => 4,
    };
    row[column]
}

// =============================================================================
// Tests
// =============================================================================
