use axum::{routing::post, Json, Router};
use tracing::info;

use super::profile::ProfileReport;
use super::request::{FrontMarkRequest, SideMarkRequest};
use crate::error::AppError;

/// Router builder exposing the assessment endpoints under both route styles.
pub fn assessment_router() -> Router {
    Router::new()
        .route("/getsidemark", post(side_mark_handler))
        .route("/getfrontmark", post(front_mark_handler))
        .route("/api/v1/assessments/side", post(side_mark_handler))
        .route("/api/v1/assessments/front", post(front_mark_handler))
}

pub(crate) async fn side_mark_handler(
    Json(request): Json<SideMarkRequest>,
) -> Result<Json<ProfileReport>, AppError> {
    let result = request.assess()?;
    info!(
        profile = result.profile.label(),
        mark = result.total_score,
        percent = result.percentage,
        "side profile assessed"
    );
    Ok(Json(result.report()))
}

pub(crate) async fn front_mark_handler(
    Json(request): Json<FrontMarkRequest>,
) -> Result<Json<ProfileReport>, AppError> {
    let result = request.assess()?;
    info!(
        profile = result.profile.label(),
        mark = result.total_score,
        percent = result.percentage,
        "front profile assessed"
    );
    Ok(Json(result.report()))
}
