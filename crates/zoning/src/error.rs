// ---------------------------------------------------------------------------
// ValidationError: rejection of feasibility and measurement requests
// ---------------------------------------------------------------------------

use std::fmt;

use crate::feasibility::zoning_table::RoadWidth;

/// Errors raised when a request cannot be turned into a well-formed
/// calculation input.
///
/// The calculations themselves never fail; every rejection happens once, at
/// the boundary, before any scenario is generated.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Site area was zero, negative, or not a finite number.
    NonPositiveSiteArea(f64),
    /// Road width is not one of the tabulated brackets.
    UnsupportedRoadWidth(f64),
    /// No floor height options were supplied.
    NoFloorHeights,
    /// More floor height options than the sweep accepts.
    TooManyFloorHeights { max: usize, found: usize },
    /// A floor height option was zero, negative, or not finite.
    NonPositiveFloorHeight(f64),
    /// A floor height option was below the smallest storey the sweep accepts.
    FloorHeightBelowMinimum { min: f64, value: f64 },
    /// Plot width or depth was negative or not finite.
    InvalidPlotDimension { field: &'static str, value: f64 },
    /// A plot boundary needs at least three vertices to enclose an area.
    TooFewVertices(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositiveSiteArea(v) => {
                write!(f, "Site area must be greater than zero, got {v}")
            }
            ValidationError::UnsupportedRoadWidth(v) => {
                let allowed: Vec<String> = RoadWidth::ALL
                    .iter()
                    .map(|w| w.metres().to_string())
                    .collect();
                write!(
                    f,
                    "Unsupported road width {v} m: expected one of {{{}}}",
                    allowed.join(", ")
                )
            }
            ValidationError::NoFloorHeights => {
                write!(f, "At least one floor height option is required")
            }
            ValidationError::TooManyFloorHeights { max, found } => write!(
                f,
                "Too many floor height options: got {found}, at most {max} are allowed"
            ),
            ValidationError::NonPositiveFloorHeight(v) => {
                write!(f, "Floor heights must be greater than zero, got {v}")
            }
            ValidationError::FloorHeightBelowMinimum { min, value } => {
                write!(f, "Floor heights must be at least {min} m, got {value}")
            }
            ValidationError::InvalidPlotDimension { field, value } => {
                write!(f, "Plot {field} must be a non-negative number, got {value}")
            }
            ValidationError::TooFewVertices(n) => {
                write!(f, "A plot boundary needs at least 3 vertices, got {n}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ExportError: failures while rendering the CSV table
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    Csv(csv::Error),
    /// Flushing the underlying writer failed.
    Io(std::io::Error),
    /// Rendered bytes were not valid UTF-8.
    Encoding(std::string::FromUtf8Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Csv(e) => write!(f, "CSV error: {e}"),
            ExportError::Io(e) => write!(f, "I/O error: {e}"),
            ExportError::Encoding(e) => write!(f, "Encoding error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Csv(e) => Some(e),
            ExportError::Io(e) => Some(e),
            ExportError::Encoding(e) => Some(e),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<std::string::FromUtf8Error> for ExportError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        ExportError::Encoding(e)
    }
}
