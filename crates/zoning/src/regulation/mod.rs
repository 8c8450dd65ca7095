//! Zonal regulation resolver.
//!
//! Maps a zone key, plot geometry and road width to the permissible FAR,
//! ground coverage, premium FAR and required setbacks. [`resolve`] is total:
//! unknown zones and non-positive areas degrade to an all-zero result with
//! placeholder setbacks instead of failing.
//!
//! The FAR branch and the setback branch are independent. FAR depends on the
//! zone, plot area and road width; setbacks depend on plot area, frontage
//! (through depth) and proposed building height.

mod far_rules;
mod setbacks;

pub use far_rules::{
    base_allowance, premium_far, BaseAllowance, Bracket, NARROW_ROAD_M, NARROW_ROAD_NOTE,
    PREMIUM_MIN_ROAD_M,
};
pub use setbacks::{derive_setbacks, high_rise_setback, SetbackRegime, Setbacks};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::numeric::{finite_or_zero, round_to};
use crate::zones::ZoneClassification;

/// Decimal places kept on the FAR figures of a [`RegulationOutput`].
pub const FAR_DECIMALS: i32 = 3;

// =============================================================================
// Input / output
// =============================================================================

/// Inputs of a regulation lookup.
///
/// `zone` is the raw key from the caller; it is normalized through
/// [`ZoneClassification::from_key`].
///
/// Every field may be omitted on the wire; a missing number reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegulationInput {
    pub zone: String,
    pub area_sqm: f64,
    pub frontage_m: f64,
    pub road_width_m: f64,
    pub building_height_m: f64,
}

impl RegulationInput {
    /// Plot depth implied by area and frontage; zero without frontage.
    pub fn depth(&self) -> f64 {
        let area = finite_or_zero(self.area_sqm);
        let frontage = finite_or_zero(self.frontage_m);
        if frontage > 0.0 {
            area / frontage
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulationOutput {
    #[serde(rename = "baseFAR")]
    pub base_far: f64,
    pub coverage_percent: u32,
    #[serde(rename = "premiumFAR")]
    pub premium_far: f64,
    #[serde(rename = "totalFAR")]
    pub total_far: f64,
    pub restriction_note: Option<String>,
    pub setbacks: Setbacks,
}

// =============================================================================
// Resolver
// =============================================================================

pub fn resolve(input: &RegulationInput) -> RegulationOutput {
    let area = finite_or_zero(input.area_sqm);
    let frontage = finite_or_zero(input.frontage_m);
    let road = finite_or_zero(input.road_width_m);
    let height = finite_or_zero(input.building_height_m);
    let depth = input.depth();

    let zone = ZoneClassification::from_key(&input.zone);
    if zone.is_none() && !input.zone.trim().is_empty() {
        warn!(zone = %input.zone, "unrecognised zone key, regulation resolves to zero");
    }

    let allowance = match zone {
        Some(zone) if area > 0.0 => base_allowance(zone, area, road),
        _ => BaseAllowance::NONE,
    };
    let premium = zone.map_or(0.0, |zone| premium_far(zone, allowance.far, road));
    let total_far = round_to(allowance.far + premium, FAR_DECIMALS);
    let setbacks = derive_setbacks(area, frontage, depth, height);

    debug!(
        zone = ?zone,
        area,
        road,
        base_far = allowance.far,
        premium,
        total_far,
        rule = %setbacks.rule_used,
        "resolved zonal regulation"
    );

    RegulationOutput {
        base_far: round_to(allowance.far, FAR_DECIMALS),
        coverage_percent: allowance.coverage_percent,
        premium_far: round_to(premium, FAR_DECIMALS),
        total_far,
        restriction_note: allowance.restriction_note.map(str::to_string),
        setbacks,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(zone: &str, area: f64, frontage: f64, road: f64, height: f64) -> RegulationInput {
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

    #[test]
    fn test_depth_derived_from_frontage() {
        assert!(approx(input("park_open", 500.0, 20.0, 0.0, 0.0).depth(), 25.0));
        assert_eq!(input("park_open", 500.0, 0.0, 0.0, 0.0).depth(), 0.0);
    }

    #[test]
    fn test_residential_main_scenario() {
        let out = resolve(&input("residential_main", 500.0, 20.0, 18.0, 0.0));
        assert!(approx(out.base_far, 2.25));
        assert_eq!(out.coverage_percent, 65);
        assert!(approx(out.premium_far, 0.40));
        assert!(approx(out.total_far, 2.65));
        assert_eq!(out.restriction_note, None);
        // No height => setbacks are not computed.
        assert_eq!(out.setbacks, Setbacks::none());
    }

    #[test]
    fn test_park_excludes_premium() {
        let out = resolve(&input("park_open", 1000.0, 20.0, 30.0, 0.0));
        assert!(approx(out.base_far, 0.5));
        assert_eq!(out.coverage_percent, 5);
        assert_eq!(out.premium_far, 0.0);
        assert!(approx(out.total_far, 0.5));
    }

    #[test]
    fn test_commercial_alias_resolves_to_business_rules() {
        let a = resolve(&input("commercial", 800.0, 20.0, 24.0, 0.0));
        let b = resolve(&input("commercial_business", 800.0, 20.0, 24.0, 0.0));
        assert_eq!(a, b);
        assert!(approx(a.base_far, 2.50));
        assert_eq!(a.coverage_percent, 45);
    }

    #[test]
    fn test_unknown_zone_is_zero_but_keeps_setbacks() {
        let out = resolve(&input("harbour", 100.0, 10.0, 18.0, 10.0));
        assert_eq!(out.base_far, 0.0);
        assert_eq!(out.coverage_percent, 0);
        assert_eq!(out.premium_far, 0.0);
        assert_eq!(out.total_far, 0.0);
        assert_eq!(out.setbacks.front, "0.90 m");
    }

    #[test]
    fn test_non_positive_area_is_all_zero() {
        for area in [0.0, -10.0, f64::NAN] {
            let out = resolve(&input("residential_mixed", area, 10.0, 30.0, 20.0));
            assert_eq!(out.base_far, 0.0);
            assert_eq!(out.coverage_percent, 0);
            assert_eq!(out.premium_far, 0.0);
            assert_eq!(out.total_far, 0.0);
            assert_eq!(out.setbacks, Setbacks::none());
        }
    }

    #[test]
    fn test_zero_frontage_keeps_far_but_drops_setbacks() {
        let out = resolve(&input("residential_mixed", 500.0, 0.0, 24.0, 10.0));
        assert!(approx(out.base_far, 2.50));
        assert_eq!(out.setbacks, Setbacks::none());
    }

    #[test]
    fn test_narrow_road_note_surfaces() {
        let out = resolve(&input("residential_main", 200.0, 10.0, 6.0, 0.0));
        assert_eq!(out.restriction_note.as_deref(), Some(NARROW_ROAD_NOTE));
        assert_eq!(out.premium_far, 0.0);
    }

    #[test]
    fn test_wire_field_names() {
        let out = resolve(&input("residential_main", 500.0, 20.0, 18.0, 10.0));
        let json = serde_json::to_value(&out).unwrap();
        for key in [
            "baseFAR",
            "coveragePercent",
            "premiumFAR",
            "totalFAR",
            "restrictionNote",
            "setbacks",
        ] {
            assert!(json.get(key).is_some(), "missing {key} in {json}");
        }
        assert!(json["setbacks"].get("ruleUsed").is_some());
    }

    #[test]
    fn test_input_defaults_optional_fields() {
        let parsed: RegulationInput =
            serde_json::from_str(r#"{"zone":"park_open","areaSqm":100}"#).unwrap();
        assert_eq!(parsed.frontage_m, 0.0);
        assert_eq!(parsed.road_width_m, 0.0);
        assert_eq!(parsed.building_height_m, 0.0);
    }

    #[test]
    fn test_missing_area_resolves_to_zero() {
        let parsed: RegulationInput =
            serde_json::from_str(r#"{"zone":"residential_main","roadWidthM":18}"#).unwrap();
        assert_eq!(parsed.area_sqm, 0.0);

        let out = resolve(&parsed);
        assert_eq!(out.base_far, 0.0);
        assert_eq!(out.coverage_percent, 0);
        assert_eq!(out.premium_far, 0.0);
        assert_eq!(out.total_far, 0.0);
        assert_eq!(out.setbacks, Setbacks::none());

        let empty: RegulationInput = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RegulationInput::default());
    }
}
