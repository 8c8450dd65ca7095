//! api.rs: HTTP routes for the regulation resolver, the feasibility
//! calculator, its CSV export, and the reference tables the map form needs.

use axum::{
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, services::ServeDir};
use tracing::{error, warn};

use zoning::export::scenarios_to_csv;
use zoning::feasibility::zoning_table::{road_width_brackets, RoadWidthInfo};
use zoning::feasibility::{enumerate, FeasibilityReport, PlotRequest};
use zoning::geometry::{measure_plot, LatLng, PlotMeasurement};
use zoning::regulation::{resolve, RegulationInput, RegulationOutput};
use zoning::zones::{zone_catalogue, ZoneInfo};
use zoning::{ExportError, ValidationError};

use crate::config::ServerConfig;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const CSV_DISPOSITION: &str = "attachment; filename=\"FAR_Feasibility_Study.csv\"";

pub fn router(cfg: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/zoning/resolve", post(resolve_regulation))
        .route("/zoning/feasibility", post(feasibility))
        .route("/zoning/feasibility/export", post(feasibility_export))
        .route("/zoning/zones", get(zones))
        .route("/zoning/road-widths", get(road_widths))
        .route("/plot/measure", post(measure));

    if let Some(dir) = &cfg.serve_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}

// --------------------------------------
// Errors
// --------------------------------------

#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    Export(ExportError),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Export(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(e) => {
                warn!(error = %e, "rejected calculation request");
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::Export(e) => {
                error!(error = %e, "feasibility export failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

// --------------------------------------
// Handlers
// --------------------------------------

async fn resolve_regulation(Json(input): Json<RegulationInput>) -> Json<RegulationOutput> {
    Json(resolve(&input))
}

/// Feasibility study plus the banner line for the optimal option.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityResponse {
    #[serde(flatten)]
    pub report: FeasibilityReport,
    pub optimal_description: Option<String>,
}

async fn feasibility(
    Json(request): Json<PlotRequest>,
) -> Result<Json<FeasibilityResponse>, ApiError> {
    let plot = request.validate()?;
    let report = enumerate(&plot);
    let optimal_description = report.optimal_description();
    Ok(Json(FeasibilityResponse {
        report,
        optimal_description,
    }))
}

async fn feasibility_export(Json(request): Json<PlotRequest>) -> Result<Response, ApiError> {
    let plot = request.validate()?;
    let csv = scenarios_to_csv(&enumerate(&plot).scenarios)?;
    Ok((
        [(CONTENT_TYPE, CSV_CONTENT_TYPE), (CONTENT_DISPOSITION, CSV_DISPOSITION)],
        csv,
    )
        .into_response())
}

async fn zones() -> Json<Vec<ZoneInfo>> {
    Json(zone_catalogue())
}

async fn road_widths() -> Json<Vec<RoadWidthInfo>> {
    Json(road_width_brackets())
}

/// Body of /plot/measure: the drawn boundary, in drawing order.
#[derive(Debug, Deserialize)]
pub struct MeasureRequest {
    pub vertices: Vec<LatLng>,
}

async fn measure(
    Json(request): Json<MeasureRequest>,
) -> Result<Json<PlotMeasurement>, ApiError> {
    Ok(Json(measure_plot(&request.vertices)?))
}
