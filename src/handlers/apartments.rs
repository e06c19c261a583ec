// src/handlers/apartments.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{common::error::AppError, config::AppState, models::apartment::Apartment};

// GET /apartmentData
#[utoipa::path(
    get,
    path = "/apartmentData",
    tag = "Apartments",
    responses((status = 200, description = "Todos os apartamentos anunciados", body = Vec<Apartment>))
)]
pub async fn list_apartments(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let apartments = app_state.apartment_repo.list_all().await?;
    Ok(Json(apartments))
}
