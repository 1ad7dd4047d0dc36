//! Axum route handlers for the Export API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::document::ExportDocument;
use crate::export::normalizer::{export_cv, ExportParams};
use crate::routes::UserIdQuery;
use crate::state::AppState;

/// GET /api/v1/cvs/:id/export
///
/// Returns the renderer-ready Export Document for one of the caller's CVs.
pub async fn handle_export_cv(
    State(state): State<AppState>,
    Path(cv_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ExportDocument>, AppError> {
    let document = export_cv(
        state.store.as_ref(),
        state.skill_classifier.as_ref(),
        ExportParams {
            user_id: params.user_id,
            cv_id,
            generated_at: Utc::now(),
            placeholder_name: &state.config.export_placeholder_name,
        },
    )
    .await?;

    Ok(Json(document))
}
