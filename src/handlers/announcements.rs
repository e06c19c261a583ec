// src/handlers/announcements.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{announcement::Announcement, results::InsertResult},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Manutenção do elevador")]
    pub title: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "O elevador do bloco B ficará parado na sexta-feira.")]
    pub description: String,
}

// POST /announcement
#[utoipa::path(
    post,
    path = "/announcement",
    tag = "Announcements",
    request_body = CreateAnnouncementPayload,
    responses((status = 200, description = "Aviso publicado", body = InsertResult))
)]
pub async fn create_announcement(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateAnnouncementPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let announcement = app_state
        .announcement_repo
        .create(&payload.title, &payload.description)
        .await?;

    Ok(Json(InsertResult::new(announcement.id)))
}

// GET /announcement
#[utoipa::path(
    get,
    path = "/announcement",
    tag = "Announcements",
    responses((status = 200, description = "Avisos, do mais recente ao mais antigo", body = Vec<Announcement>))
)]
pub async fn list_announcements(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let announcements = app_state.announcement_repo.list_all().await?;
    Ok(Json(announcements))
}
