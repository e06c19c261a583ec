// src/handlers/stats.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{common::error::AppError, config::AppState, models::stats::AdminStats};

// GET /admin-stats
#[utoipa::path(
    get,
    path = "/admin-stats",
    tag = "Admin",
    responses((status = 200, description = "Contagens do painel do administrador", body = AdminStats))
)]
pub async fn admin_stats(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = app_state.stats_repo.admin_stats().await?;
    Ok(Json(stats))
}
