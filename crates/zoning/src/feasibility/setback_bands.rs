//! Height bands and their perimeter setbacks swept by the enumerator.

/// A building height band with the setback required on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetbackBand {
    pub min_height: f64,
    pub max_height: f64,
    pub setback: f64,
}

const fn band(min_height: f64, max_height: f64, setback: f64) -> SetbackBand {
    SetbackBand {
        min_height,
        max_height,
        setback,
    }
}

/// Ordered from lowest to highest. The top band stands in for "50 m and up".
pub const SETBACK_BANDS: [SetbackBand; 11] = [
    band(11.5, 15.0, 5.0),
    band(15.0, 18.0, 6.0),
    band(18.0, 21.0, 7.0),
    band(21.0, 24.0, 8.0),
    band(24.0, 27.0, 9.0),
    band(27.0, 30.0, 10.0),
    band(30.0, 35.0, 11.0),
    band(35.0, 40.0, 12.0),
    band(40.0, 45.0, 13.0),
    band(45.0, 50.0, 14.0),
    band(50.0, 100.0, 16.0),
];

impl SetbackBand {
    /// Footprint left after stepping in `setback` from every edge of a
    /// `width` x `depth` plot. Zero once either side collapses.
    pub fn buildable_area(&self, width: f64, depth: f64) -> f64 {
        let inner_width = (width - 2.0 * self.setback).max(0.0);
        let inner_depth = (depth - 2.0 * self.setback).max(0.0);
        if inner_width <= 0.0 || inner_depth <= 0.0 {
            return 0.0;
        }
        inner_width * inner_depth
    }
}
