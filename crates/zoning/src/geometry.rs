//! Scalar measurements of a drawn plot boundary.
//!
//! The area is a planar approximation: the shoelace formula over raw
//! (longitude, latitude) degrees, scaled by a fixed metres-per-degree
//! factor. It is accurate enough for plot-sized polygons near the reference
//! latitude and is not a geodesic computation. Edge lengths use the
//! haversine great-circle distance.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Metres per degree used to scale the planar area (about 111 km near 13°N).
pub const METRES_PER_DEGREE: f64 = 111_000.0;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Planar area of the closed ring `vertices` in square metres.
/// Fewer than three vertices enclose nothing and give zero.
pub fn planar_area_sqm(vertices: &[LatLng]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let twice_area: f64 = ring_edges(vertices)
        .map(|(a, b)| a.lng * b.lat - b.lng * a.lat)
        .sum();
    (twice_area / 2.0).abs() * METRES_PER_DEGREE * METRES_PER_DEGREE
}

/// Great-circle distance between two points in metres.
pub fn haversine_distance_m(a: LatLng, b: LatLng) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Consecutive vertex pairs of the ring, closing back to the first vertex.
fn ring_edges(vertices: &[LatLng]) -> impl Iterator<Item = (LatLng, LatLng)> + '_ {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotMeasurement {
    pub area_sqm: f64,
    pub perimeter_m: f64,
    /// Edge `i` runs from vertex `i` to vertex `i + 1` (wrapping).
    pub edge_lengths_m: Vec<f64>,
}

/// Measures a plot boundary for the calculator form.
pub fn measure_plot(vertices: &[LatLng]) -> Result<PlotMeasurement, ValidationError> {
    if vertices.len() < 3 {
        return Err(ValidationError::TooFewVertices(vertices.len()));
    }
    let edge_lengths_m: Vec<f64> = ring_edges(vertices)
        .map(|(a, b)| haversine_distance_m(a, b))
        .collect();
    Ok(PlotMeasurement {
        area_sqm: planar_area_sqm(vertices),
        perimeter_m: edge_lengths_m.iter().sum(),
        edge_lengths_m,
    })
}
