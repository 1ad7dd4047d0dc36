pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::export::handlers as export;
use crate::library::handlers as library;
use crate::profile::handlers as profile;
use crate::state::AppState;

/// Caller identity, supplied by the upstream auth layer.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Export API
        .route("/api/v1/cvs/:id/export", get(export::handle_export_cv))
        // Master Library API
        .route(
            "/api/v1/cvs/:id/sections/from-master",
            post(library::handle_seed_section),
        )
        .route("/api/v1/bullets/:id", patch(library::handle_edit_bullet))
        // Profile API
        .route("/api/v1/profile", get(profile::handle_get_profile))
        .with_state(state)
}
