//! Comma-separated export of a feasibility study.
//!
//! Numbers are fixed-point with the same precision as the on-screen table:
//! one decimal for setbacks, heights and percentages, two for floor heights
//! and FAR values, none for areas.

use std::io;

use crate::error::ExportError;
use crate::feasibility::PlotScenario;

/// Suggested download name for the export.
pub const EXPORT_FILE_NAME: &str = "FAR_Feasibility_Study.csv";

pub const EXPORT_HEADER: [&str; 13] = [
    "Setback (m)",
    "Max Height (m)",
    "Floor Height (m)",
    "Max Floors",
    "Setback Area Loss (%)",
    "Buildable Area (sqm)",
    "Coverage Area (sqm)",
    "Total FAR Area (sqm)",
    "FAR Allowed",
    "Achieved FAR",
    "FAR Utilization (%)",
    "Height Achieved (m)",
    "Status",
];

fn scenario_record(s: &PlotScenario) -> [String; 13] {
    [
        format!("{:.1}", s.setback),
        format!("{:.1}", s.max_height),
        format!("{:.2}", s.floor_height),
        s.max_floors.to_string(),
        format!("{:.1}", s.setback_area_loss_percent),
        format!("{:.0}", s.buildable_area),
        format!("{:.0}", s.coverage_area),
        format!("{:.0}", s.total_far_area),
        format!("{:.2}", s.far_allowed),
        format!("{:.2}", s.achieved_far),
        format!("{:.1}", s.far_utilization_percent),
        format!("{:.1}", s.height_achieved),
        s.status().label().to_string(),
    ]
}

/// Streams the header and one row per scenario into `writer`.
pub fn write_scenarios<W: io::Write>(
    writer: W,
    scenarios: &[PlotScenario],
) -> Result<(), ExportError> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(EXPORT_HEADER)?;
    for scenario in scenarios {
        csv.write_record(scenario_record(scenario))?;
    }
    csv.flush()?;
    Ok(())
}

/// Renders the whole table as a string.
pub fn scenarios_to_csv(scenarios: &[PlotScenario]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_scenarios(&mut buf, scenarios)?;
    Ok(String::from_utf8(buf)?)
}
