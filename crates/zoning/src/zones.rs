//! Fine-grained zone classification used by the regulation resolver.
//!
//! Zone keys arrive as free-form strings from the map layer. They are
//! normalized through [`ZoneClassification::from_key`], which accepts the
//! canonical snake_case keys, the short rule codes, and the generic
//! `commercial` convenience alias. Anything else stays unresolved, and the
//! resolver turns an unresolved zone into an all-zero result.
//!
//! This taxonomy is deliberately separate from the coarse three-way
//! [`ZoneType`](crate::feasibility::zoning_table::ZoneType) that keys the
//! feasibility table.

use serde::{Deserialize, Serialize};

// =============================================================================
// ZoneClassification enum
// =============================================================================

/// Land-use zone categories of the master plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneClassification {
    ResidentialMain,
    ResidentialMixed,
    CommercialCentral,
    CommercialBusiness,
    MutationCorridor,
    CommercialAxes,
    IndustrialGeneral,
    IndustrialHitech,
    #[serde(rename = "ps_p")]
    PublicSemiPublic,
    TrafficTransport,
    #[serde(rename = "public_utilities")]
    PublicUtility,
    ParkOpen,
    Agricultural,
    Unclassified,
}

/// Raw key → zone. Canonical keys first, then the generic alias, then the
/// short rule codes.
const ZONE_ALIASES: &[(&str, ZoneClassification)] = &[
    ("residential_main", ZoneClassification::ResidentialMain),
    ("residential_mixed", ZoneClassification::ResidentialMixed),
    ("commercial_central", ZoneClassification::CommercialCentral),
    ("commercial_business", ZoneClassification::CommercialBusiness),
    ("mutation_corridor", ZoneClassification::MutationCorridor),
    ("commercial_axes", ZoneClassification::CommercialAxes),
    ("industrial_general", ZoneClassification::IndustrialGeneral),
    ("industrial_hitech", ZoneClassification::IndustrialHitech),
    ("ps_p", ZoneClassification::PublicSemiPublic),
    ("traffic_transport", ZoneClassification::TrafficTransport),
    ("public_utilities", ZoneClassification::PublicUtility),
    ("park_open", ZoneClassification::ParkOpen),
    ("agricultural", ZoneClassification::Agricultural),
    ("unclassified", ZoneClassification::Unclassified),
    ("commercial", ZoneClassification::CommercialBusiness),
    ("res_main", ZoneClassification::ResidentialMain),
    ("res_mixed", ZoneClassification::ResidentialMixed),
    ("comm_central", ZoneClassification::CommercialCentral),
    ("comm_business", ZoneClassification::CommercialBusiness),
    ("mutation", ZoneClassification::MutationCorridor),
    ("comm_axes", ZoneClassification::CommercialAxes),
    ("ind_gen", ZoneClassification::IndustrialGeneral),
    ("ind_hitech", ZoneClassification::IndustrialHitech),
    ("psp", ZoneClassification::PublicSemiPublic),
    ("tt", ZoneClassification::TrafficTransport),
    ("pu", ZoneClassification::PublicUtility),
    ("park", ZoneClassification::ParkOpen),
    ("ag", ZoneClassification::Agricultural),
    ("uc", ZoneClassification::Unclassified),
];

impl ZoneClassification {
    pub const ALL: [ZoneClassification; 14] = [
        ZoneClassification::ResidentialMain,
        ZoneClassification::ResidentialMixed,
        ZoneClassification::CommercialCentral,
        ZoneClassification::CommercialBusiness,
        ZoneClassification::MutationCorridor,
        ZoneClassification::CommercialAxes,
        ZoneClassification::IndustrialGeneral,
        ZoneClassification::IndustrialHitech,
        ZoneClassification::PublicSemiPublic,
        ZoneClassification::TrafficTransport,
        ZoneClassification::PublicUtility,
        ZoneClassification::ParkOpen,
        ZoneClassification::Agricultural,
        ZoneClassification::Unclassified,
    ];

    /// Normalizes a raw zone key. Returns `None` for empty or unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        ZONE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, zone)| *zone)
    }

    /// Canonical wire key.
    pub fn key(self) -> &'static str {
        match self {
            ZoneClassification::ResidentialMain => "residential_main",
            ZoneClassification::ResidentialMixed => "residential_mixed",
            ZoneClassification::CommercialCentral => "commercial_central",
            ZoneClassification::CommercialBusiness => "commercial_business",
            ZoneClassification::MutationCorridor => "mutation_corridor",
            ZoneClassification::CommercialAxes => "commercial_axes",
            ZoneClassification::IndustrialGeneral => "industrial_general",
            ZoneClassification::IndustrialHitech => "industrial_hitech",
            ZoneClassification::PublicSemiPublic => "ps_p",
            ZoneClassification::TrafficTransport => "traffic_transport",
            ZoneClassification::PublicUtility => "public_utilities",
            ZoneClassification::ParkOpen => "park_open",
            ZoneClassification::Agricultural => "agricultural",
            ZoneClassification::Unclassified => "unclassified",
        }
    }

    /// Returns the display name of the zone.
    pub fn label(self) -> &'static str {
        match self {
            ZoneClassification::ResidentialMain => "Residential (Main)",
            ZoneClassification::ResidentialMixed => "Residential (Mixed)",
            ZoneClassification::CommercialCentral => "Commercial (Central)",
            ZoneClassification::CommercialBusiness => "Commercial (Business)",
            ZoneClassification::MutationCorridor => "Mutation Corridor",
            ZoneClassification::CommercialAxes => "Commercial (Axes)",
            ZoneClassification::IndustrialGeneral => "Industrial (General)",
            ZoneClassification::IndustrialHitech => "Industrial (Hi-Tech)",
            ZoneClassification::PublicSemiPublic => "Public / Semi-public",
            ZoneClassification::TrafficTransport => "Traffic & Transport",
            ZoneClassification::PublicUtility => "Public Utilities",
            ZoneClassification::ParkOpen => "Parks & Open Space",
            ZoneClassification::Agricultural => "Agricultural",
            ZoneClassification::Unclassified => "Unclassified",
        }
    }

    /// Broad land-use family, used to group the catalogue.
    pub fn category(self) -> &'static str {
        match self {
            ZoneClassification::ResidentialMain | ZoneClassification::ResidentialMixed => {
                "Residential"
            }
            ZoneClassification::CommercialCentral
            | ZoneClassification::CommercialBusiness
            | ZoneClassification::MutationCorridor
            | ZoneClassification::CommercialAxes => "Commercial",
            ZoneClassification::IndustrialGeneral | ZoneClassification::IndustrialHitech => {
                "Industrial"
            }
            ZoneClassification::PublicSemiPublic
            | ZoneClassification::TrafficTransport
            | ZoneClassification::PublicUtility => "Public/Semi-public",
            ZoneClassification::ParkOpen | ZoneClassification::Agricultural => "Open Space",
            ZoneClassification::Unclassified => "Unclassified",
        }
    }

    /// One-line summary shown next to the zone in the reference table.
    pub fn description(self) -> &'static str {
        match self {
            ZoneClassification::ResidentialMain => {
                "Primary residential zone for single-family homes"
            }
            ZoneClassification::ResidentialMixed => {
                "Mixed residential zone with multi-family housing"
            }
            ZoneClassification::CommercialCentral => {
                "Central business district with high-rise commercial buildings"
            }
            ZoneClassification::CommercialBusiness => "Business and office complexes",
            ZoneClassification::MutationCorridor => {
                "Corridor along arterial roads where land use may change to commercial"
            }
            ZoneClassification::CommercialAxes => {
                "Linear commercial development along major roads"
            }
            ZoneClassification::IndustrialGeneral => "General industrial and manufacturing zone",
            ZoneClassification::IndustrialHitech => "High-tech and IT industrial park",
            ZoneClassification::PublicSemiPublic => {
                "Government offices, hospitals, schools, and public institutions"
            }
            ZoneClassification::TrafficTransport => {
                "Bus depots, terminals, parking and other transport facilities"
            }
            ZoneClassification::PublicUtility => {
                "Water, sewerage, power and other utility installations"
            }
            ZoneClassification::ParkOpen => "Parks, playgrounds and open space",
            ZoneClassification::Agricultural => "Agricultural land outside the urban area",
            ZoneClassification::Unclassified => "Land without an assigned zone",
        }
    }

    /// Use permitted by right in the zone.
    pub fn permissible_use(self) -> &'static str {
        match self {
            ZoneClassification::IndustrialGeneral => "Industrial",
            ZoneClassification::IndustrialHitech => "High Tech",
            other => other.label(),
        }
    }

    /// Parking norm of the zone reference table. Only the built-up zones
    /// carry one.
    pub fn parking_norm(self) -> Option<u32> {
        match self {
            ZoneClassification::ResidentialMain => Some(100),
            ZoneClassification::ResidentialMixed => Some(75),
            ZoneClassification::CommercialCentral => Some(75),
            ZoneClassification::CommercialBusiness => Some(65),
            ZoneClassification::CommercialAxes => Some(80),
            ZoneClassification::IndustrialGeneral => Some(100),
            ZoneClassification::IndustrialHitech => Some(75),
            ZoneClassification::PublicSemiPublic => Some(100),
            _ => None,
        }
    }

    /// Parks and agricultural land never earn premium FAR.
    pub fn excludes_premium(self) -> bool {
        matches!(
            self,
            ZoneClassification::ParkOpen | ZoneClassification::Agricultural
        )
    }
}

// =============================================================================
// Catalogue
// =============================================================================

/// One row of the zone reference table served to the map layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub permissible_use: &'static str,
    pub parking_norm: Option<u32>,
}

pub fn zone_catalogue() -> Vec<ZoneInfo> {
    ZoneClassification::ALL
        .iter()
        .map(|&zone| ZoneInfo {
            key: zone.key(),
            label: zone.label(),
            category: zone.category(),
            description: zone.description(),
            permissible_use: zone.permissible_use(),
            parking_norm: zone.parking_norm(),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // from_key tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_canonical_keys_round_trip() {
        for zone in ZoneClassification::ALL {
            assert_eq!(
                ZoneClassification::from_key(zone.key()),
                Some(zone),
                "{:?} should resolve from its own key",
                zone
            );
        }
    }

    #[test]
    fn test_commercial_alias_maps_to_business() {
        assert_eq!(
            ZoneClassification::from_key("commercial"),
            Some(ZoneClassification::CommercialBusiness)
        );
    }

    #[test]
    fn test_short_rule_codes_resolve() {
        assert_eq!(
            ZoneClassification::from_key("res_main"),
            Some(ZoneClassification::ResidentialMain)
        );
        assert_eq!(
            ZoneClassification::from_key("psp"),
            Some(ZoneClassification::PublicSemiPublic)
        );
        assert_eq!(
            ZoneClassification::from_key("ag"),
            Some(ZoneClassification::Agricultural)
        );
    }

    #[test]
    fn test_unknown_and_empty_keys_unresolved() {
        assert_eq!(ZoneClassification::from_key(""), None);
        assert_eq!(ZoneClassification::from_key("downtown"), None);
        assert_eq!(ZoneClassification::from_key("Residential_Main"), None);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            ZoneClassification::from_key("  park_open "),
            Some(ZoneClassification::ParkOpen)
        );
    }

    // -------------------------------------------------------------------------
    // Attribute tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_only_park_and_agricultural_exclude_premium() {
        for zone in ZoneClassification::ALL {
            let expected = matches!(
                zone,
                ZoneClassification::ParkOpen | ZoneClassification::Agricultural
            );
            assert_eq!(zone.excludes_premium(), expected, "{:?}", zone);
        }
    }

    #[test]
    fn test_serde_uses_canonical_keys() {
        for zone in ZoneClassification::ALL {
            let json = serde_json::to_string(&zone).unwrap();
            assert_eq!(json, format!("\"{}\"", zone.key()));
        }
    }

    #[test]
    fn test_catalogue_covers_every_zone() {
        let catalogue = zone_catalogue();
        assert_eq!(catalogue.len(), ZoneClassification::ALL.len());
        for info in &catalogue {
            assert!(!info.label.is_empty(), "{} should have a label", info.key);
            assert!(!info.category.is_empty());
            assert!(!info.description.is_empty(), "{} should have a description", info.key);
            assert!(!info.permissible_use.is_empty());
        }
    }

    #[test]
    fn test_catalogue_reference_fields() {
        let catalogue = zone_catalogue();
        let business = catalogue
            .iter()
            .find(|z| z.key == "commercial_business")
            .unwrap();
        assert_eq!(business.description, "Business and office complexes");
        assert_eq!(business.permissible_use, "Commercial (Business)");
        assert_eq!(business.parking_norm, Some(65));

        let hitech = catalogue.iter().find(|z| z.key == "industrial_hitech").unwrap();
        assert_eq!(hitech.permissible_use, "High Tech");
        assert_eq!(hitech.parking_norm, Some(75));

        let park = catalogue.iter().find(|z| z.key == "park_open").unwrap();
        assert_eq!(park.parking_norm, None);

        let json = serde_json::to_value(business).unwrap();
        assert_eq!(json["permissibleUse"], "Commercial (Business)");
        assert_eq!(json["parkingNorm"], 65);
    }
}
