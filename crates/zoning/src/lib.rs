//! Zoning feasibility engine.
//!
//! Two independent calculations:
//!
//! - [`regulation::resolve`] maps a zone key, plot area, frontage, road width
//!   and proposed height to the permissible FAR, ground coverage, premium FAR
//!   and required setbacks.
//! - [`feasibility::enumerate`] sweeps setback bands against floor heights
//!   for a plot and picks the massing with the highest FAR utilization.
//!
//! Both are pure and synchronous. Supporting modules cover the CSV export of
//! a study ([`export`]) and the scalar measurements of a drawn boundary
//! ([`geometry`]).

pub mod error;
pub mod export;
pub mod feasibility;
pub mod geometry;
pub mod numeric;
pub mod regulation;
pub mod zones;

pub use error::{ExportError, ValidationError};
pub use feasibility::{enumerate, FeasibilityReport, PlotInput, PlotRequest, PlotScenario};
pub use regulation::{resolve, RegulationInput, RegulationOutput};
pub use zones::ZoneClassification;
