// src/handlers/coupons.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        coupon::{Coupon, CreateCouponResponse, ValidateCouponResponse},
        results::{DeleteResult, UpdateResult},
    },
    services::coupon_service::CouponValidation,
};

// GET /coupons
#[utoipa::path(
    get,
    path = "/coupons",
    tag = "Coupons",
    responses((status = 200, description = "Todos os cupons", body = Vec<Coupon>))
)]
pub async fn list_coupons(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let coupons = app_state.coupon_repo.list_all().await?;
    Ok(Json(coupons))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "NOVO10")]
    pub coupon_code: String,

    // Percentual de desconto
    #[validate(range(min = 0, max = 100, message = "invalid_discount"))]
    #[schema(example = 10)]
    pub discount: i32,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Desconto de boas-vindas")]
    pub description: String,
}

// POST /coupons
#[utoipa::path(
    post,
    path = "/coupons",
    tag = "Coupons",
    request_body = CreateCouponPayload,
    responses((status = 200, description = "Cupom criado", body = CreateCouponResponse))
)]
pub async fn create_coupon(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCouponPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let coupon = app_state
        .coupon_repo
        .create(&payload.coupon_code, payload.discount, &payload.description)
        .await?;

    Ok(Json(CreateCouponResponse {
        success: true,
        inserted_id: coupon.id,
    }))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCouponPayload {
    pub available: bool,
}

// PUT /coupons/{id}
#[utoipa::path(
    put,
    path = "/coupons/{id}",
    tag = "Coupons",
    params(("id" = Uuid, Path, description = "Id do cupom")),
    request_body = UpdateCouponPayload,
    responses((status = 200, description = "Disponibilidade atualizada", body = UpdateResult))
)]
pub async fn update_coupon(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCouponPayload>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .coupon_repo
        .set_available(id, payload.available)
        .await?;

    Ok(Json(UpdateResult {
        matched_count: rows,
        modified_count: rows,
    }))
}

// DELETE /coupons/{id}
#[utoipa::path(
    delete,
    path = "/coupons/{id}",
    tag = "Coupons",
    params(("id" = Uuid, Path, description = "Id do cupom")),
    responses((status = 200, description = "Resultado da exclusão", body = DeleteResult))
)]
pub async fn delete_coupon(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.coupon_repo.delete(id).await?;
    Ok(Json(DeleteResult {
        deleted_count: deleted,
    }))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCouponPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "NOVO10")]
    pub coupon_code: String,
}

// POST /validate-coupon
#[utoipa::path(
    post,
    path = "/validate-coupon",
    tag = "Coupons",
    request_body = ValidateCouponPayload,
    responses(
        (status = 200, description = "Cupom válido, com o desconto armazenado", body = ValidateCouponResponse),
        (status = 400, description = "Cupom indisponível", body = ValidateCouponResponse),
        (status = 404, description = "Código não cadastrado", body = ValidateCouponResponse)
    )
)]
pub async fn validate_coupon(
    State(app_state): State<AppState>,
    Json(payload): Json<ValidateCouponPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let response = match app_state
        .coupon_service
        .validate(&payload.coupon_code)
        .await?
    {
        CouponValidation::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ValidateCouponResponse {
                success: false,
                discount: None,
                message: "Cupom não encontrado.".to_string(),
            }),
        ),
        CouponValidation::NotAvailable => (
            StatusCode::BAD_REQUEST,
            Json(ValidateCouponResponse {
                success: false,
                discount: None,
                message: "Cupom indisponível.".to_string(),
            }),
        ),
        CouponValidation::Valid { discount } => (
            StatusCode::OK,
            Json(ValidateCouponResponse {
                success: true,
                discount: Some(discount),
                message: "Cupom válido.".to_string(),
            }),
        ),
    };

    Ok(response)
}
