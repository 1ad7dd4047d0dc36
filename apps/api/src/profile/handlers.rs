use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::profile::fields::{completeness, display_fields, DisplayField, ProfileCompleteness};
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub fields: Vec<DisplayField>,
    pub completeness: ProfileCompleteness,
}

/// GET /api/v1/profile
///
/// A user without a profile row gets every field empty rather than a 404.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileView>, AppError> {
    let profile = state
        .store
        .find_profile(params.user_id)
        .await?
        .unwrap_or_else(|| ProfileRow {
            user_id: params.user_id,
            ..Default::default()
        });

    Ok(Json(ProfileView {
        fields: display_fields(&profile),
        completeness: completeness(&profile),
    }))
}
