//! Required setbacks for a proposed building.
//!
//! Two regimes apply. Low-rise buildings use the area-based table (fixed
//! distances for very small plots, proportional to plot depth and frontage
//! for mid-size ones). Everything taller uses the high-rise table, which
//! assigns one uniform distance on all sides by building height.
//!
//! Setbacks depend only on plot area, frontage, depth and building height,
//! never on the zone.

use serde::{Deserialize, Serialize};

use crate::numeric::format_distance;

// =============================================================================
// Constants
// =============================================================================

/// Plots up to this area stay in the area-based regime up to
/// [`SMALL_PLOT_MAX_LOW_RISE_HEIGHT_M`].
pub const SMALL_PLOT_AREA_SQM: f64 = 150.0;
pub const SMALL_PLOT_MAX_LOW_RISE_HEIGHT_M: f64 = 15.0;
/// Larger plots leave the area-based regime above this height.
pub const MAX_LOW_RISE_HEIGHT_M: f64 = 12.0;

pub const TINY_PLOT_AREA_SQM: f64 = 60.0;
/// Above this area the area-based regime switches to a uniform setback.
pub const PROPORTIONAL_MAX_AREA_SQM: f64 = 4000.0;

pub const FRONT_DEPTH_FRACTION: f64 = 12.0 / 100.0;
pub const REAR_DEPTH_FRACTION: f64 = 8.0 / 100.0;
pub const SIDE_FRONTAGE_FRACTION: f64 = 8.0 / 100.0;

pub const LARGE_PLOT_SETBACK_M: f64 = 5.0;

/// `(max height, setback)` rows of the high-rise table.
const HIGH_RISE_SETBACKS: [(f64, f64); 6] = [
    (15.0, 5.0),
    (18.0, 6.0),
    (21.0, 7.0),
    (24.0, 8.0),
    (27.0, 9.0),
    (30.0, 10.0),
];
const HIGH_RISE_TOP_SETBACK_M: f64 = 11.0;

// =============================================================================
// Regime
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetbackRegime {
    AreaBased,
    HighRise,
}

impl SetbackRegime {
    pub fn select(area: f64, height: f64) -> Self {
        let low_rise = if area <= SMALL_PLOT_AREA_SQM {
            height <= SMALL_PLOT_MAX_LOW_RISE_HEIGHT_M
        } else {
            height <= MAX_LOW_RISE_HEIGHT_M
        };
        if low_rise {
            SetbackRegime::AreaBased
        } else {
            SetbackRegime::HighRise
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SetbackRegime::AreaBased => "Table 8 (2025 Draft): Area-based",
            SetbackRegime::HighRise => "Table 9 (High Rise)",
        }
    }
}

// =============================================================================
// Setbacks
// =============================================================================

/// Formatted setbacks as shown on the regulation card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setbacks {
    pub front: String,
    pub rear: String,
    pub side: String,
    pub rule_used: String,
}

impl Setbacks {
    pub fn none() -> Self {
        Setbacks {
            front: "-".to_string(),
            rear: "-".to_string(),
            side: "-".to_string(),
            rule_used: "-".to_string(),
        }
    }
}

/// Uniform setback for a high-rise building of `height` metres.
pub fn high_rise_setback(height: f64) -> f64 {
    HIGH_RISE_SETBACKS
        .iter()
        .find(|(max_height, _)| height <= *max_height)
        .map_or(HIGH_RISE_TOP_SETBACK_M, |(_, setback)| *setback)
}

/// Front and rear distances plus the already formatted side entry.
fn area_based(area: f64, frontage: f64, depth: f64) -> (f64, f64, String) {
    if area <= TINY_PLOT_AREA_SQM {
        (0.75, 0.0, "0.60 m (one side)".to_string())
    } else if area <= SMALL_PLOT_AREA_SQM {
        (0.90, 0.70, "0.70 m (one side)".to_string())
    } else if area <= PROPORTIONAL_MAX_AREA_SQM {
        let side = SIDE_FRONTAGE_FRACTION * frontage;
        (
            FRONT_DEPTH_FRACTION * depth,
            REAR_DEPTH_FRACTION * depth,
            format!("{side:.2} m"),
        )
    } else {
        (
            LARGE_PLOT_SETBACK_M,
            LARGE_PLOT_SETBACK_M,
            format!("{LARGE_PLOT_SETBACK_M:.2} m (All sides)"),
        )
    }
}

/// Derives setbacks for a plot. Any non-positive input yields [`Setbacks::none`].
pub fn derive_setbacks(area: f64, frontage: f64, depth: f64, height: f64) -> Setbacks {
    if area <= 0.0 || depth <= 0.0 || height <= 0.0 {
        return Setbacks::none();
    }

    let regime = SetbackRegime::select(area, height);
    let (front, rear, side) = match regime {
        SetbackRegime::AreaBased => area_based(area, frontage, depth),
        SetbackRegime::HighRise => {
            let d = high_rise_setback(height);
            (d, d, format!("{d:.2} m"))
        }
    };

    Setbacks {
        front: format_distance(front),
        rear: format_distance(rear),
        side,
        rule_used: regime.label().to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Regime selection
    // -------------------------------------------------------------------------

    #[test]
    fn test_small_plot_stays_low_rise_up_to_15m() {
        assert_eq!(SetbackRegime::select(150.0, 15.0), SetbackRegime::AreaBased);
        assert_eq!(SetbackRegime::select(150.0, 15.1), SetbackRegime::HighRise);
    }

    #[test]
    fn test_larger_plot_stays_low_rise_up_to_12m() {
        assert_eq!(SetbackRegime::select(151.0, 12.0), SetbackRegime::AreaBased);
        assert_eq!(SetbackRegime::select(151.0, 13.0), SetbackRegime::HighRise);
    }

    // -------------------------------------------------------------------------
    // Area-based regime
    // -------------------------------------------------------------------------

    #[test]
    fn test_tiny_plot_fixed_setbacks() {
        let s = derive_setbacks(50.0, 5.0, 10.0, 9.0);
        assert_eq!(s.front, "0.75 m");
        assert_eq!(s.rear, "-");
        assert_eq!(s.side, "0.60 m (one side)");
        assert_eq!(s.rule_used, SetbackRegime::AreaBased.label());
    }

    #[test]
    fn test_small_plot_fixed_setbacks() {
        let s = derive_setbacks(100.0, 10.0, 10.0, 10.0);
        assert_eq!(s.front, "0.90 m");
        assert_eq!(s.rear, "0.70 m");
        assert_eq!(s.side, "0.70 m (one side)");
        assert_eq!(s.rule_used, "Table 8 (2025 Draft): Area-based");
    }

    #[test]
    fn test_mid_plot_proportional_setbacks() {
        // 500 sqm, 20 m frontage => depth 25 m.
        let s = derive_setbacks(500.0, 20.0, 25.0, 10.0);
        assert_eq!(s.front, "3.00 m");
        assert_eq!(s.rear, "2.00 m");
        assert_eq!(s.side, "1.60 m");
    }

    #[test]
    fn test_large_plot_uniform_setback() {
        let s = derive_setbacks(5000.0, 50.0, 100.0, 10.0);
        assert_eq!(s.front, "5.00 m");
        assert_eq!(s.rear, "5.00 m");
        assert_eq!(s.side, "5.00 m (All sides)");
    }

    // -------------------------------------------------------------------------
    // High-rise regime
    // -------------------------------------------------------------------------

    #[test]
    fn test_high_rise_table() {
        assert_eq!(high_rise_setback(13.0), 5.0);
        assert_eq!(high_rise_setback(15.0), 5.0);
        assert_eq!(high_rise_setback(18.0), 6.0);
        assert_eq!(high_rise_setback(21.0), 7.0);
        assert_eq!(high_rise_setback(24.0), 8.0);
        assert_eq!(high_rise_setback(27.0), 9.0);
        assert_eq!(high_rise_setback(30.0), 10.0);
        assert_eq!(high_rise_setback(30.5), 11.0);
        assert_eq!(high_rise_setback(120.0), 11.0);
    }

    #[test]
    fn test_high_rise_uniform_on_all_sides() {
        let s = derive_setbacks(1000.0, 20.0, 50.0, 22.0);
        assert_eq!(s.front, "8.00 m");
        assert_eq!(s.rear, "8.00 m");
        assert_eq!(s.side, "8.00 m");
        assert_eq!(s.rule_used, "Table 9 (High Rise)");
    }

    #[test]
    fn test_high_rise_setback_monotonically_increases() {
        let mut prev = 0.0;
        for h in (13..60).map(f64::from) {
            let d = high_rise_setback(h);
            assert!(d >= prev, "height {} setback {} should be >= {}", h, d, prev);
            prev = d;
        }
    }

    // -------------------------------------------------------------------------
    // Degenerate input
    // -------------------------------------------------------------------------

    #[test]
    fn test_missing_inputs_yield_placeholders() {
        assert_eq!(derive_setbacks(0.0, 10.0, 10.0, 10.0), Setbacks::none());
        assert_eq!(derive_setbacks(100.0, 0.0, 0.0, 10.0), Setbacks::none());
        assert_eq!(derive_setbacks(100.0, 10.0, 10.0, 0.0), Setbacks::none());
    }
}
