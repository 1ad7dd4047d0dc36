//! Axum route handlers for the Master Library API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::library::editing::edit_bullet;
use crate::library::seeding::seed_section;
use crate::models::cv::{CvBulletRow, CvSection};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SeedSectionRequest {
    pub user_id: Uuid,
    pub master_experience_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct EditBulletRequest {
    pub user_id: Uuid,
    pub content: String,
}

/// POST /api/v1/cvs/:id/sections/from-master
pub async fn handle_seed_section(
    State(state): State<AppState>,
    Path(cv_id): Path<Uuid>,
    Json(req): Json<SeedSectionRequest>,
) -> Result<(StatusCode, Json<CvSection>), AppError> {
    let section =
        seed_section(state.store.as_ref(), req.user_id, cv_id, req.master_experience_id).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// PATCH /api/v1/bullets/:id
pub async fn handle_edit_bullet(
    State(state): State<AppState>,
    Path(bullet_id): Path<Uuid>,
    Json(req): Json<EditBulletRequest>,
) -> Result<Json<CvBulletRow>, AppError> {
    let bullet = edit_bullet(state.store.as_ref(), req.user_id, bullet_id, &req.content).await?;
    Ok(Json(bullet))
}
