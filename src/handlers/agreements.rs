// src/handlers/agreements.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        agreement::{AcceptAgreementResponse, AgreementCart, AgreementView, CartStatus},
        results::{DeleteResult, InsertResult},
        user::UserRole,
    },
};

// =============================================================================
//  ACEITAÇÃO DO ACORDO (a única regra com mais de um passo)
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcceptAgreementPayload {
    #[validate(email(message = "invalid_email"))]
    #[schema(example = "maria@email.com")]
    pub email: String,

    #[schema(example = "member")]
    pub role: UserRole,

    #[schema(example = "checked")]
    pub status: CartStatus,

    pub agreement_date: DateTime<Utc>,

    #[serde(rename = "floor")]
    #[schema(example = 3)]
    pub floor_no: i32,

    #[serde(rename = "block")]
    #[schema(example = "B")]
    pub block_name: String,

    #[serde(rename = "room")]
    #[schema(example = "302")]
    pub apartment_no: String,

    pub rent: Decimal,
}

// PATCH /agreement/{id}
#[utoipa::path(
    patch,
    path = "/agreement/{id}",
    tag = "Agreements",
    params(("id" = Uuid, Path, description = "Id do carrinho de acordo")),
    request_body = AcceptAgreementPayload,
    responses(
        (status = 200, description = "Acordo aceito", body = AcceptAgreementResponse),
        (status = 400, description = "Nenhuma linha de usuário ou carrinho foi modificada", body = AcceptAgreementResponse)
    )
)]
pub async fn accept_agreement(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AcceptAgreementPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let modified = app_state
        .agreement_service
        .accept_agreement(
            &app_state.db_pool,
            id,
            &payload.email,
            payload.role,
            payload.status,
            payload.agreement_date,
            payload.floor_no,
            &payload.block_name,
            &payload.apartment_no,
            payload.rent,
        )
        .await?;

    let response = if modified {
        (
            StatusCode::OK,
            Json(AcceptAgreementResponse {
                success: true,
                message: "Acordo aceito com sucesso.".to_string(),
            }),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(AcceptAgreementResponse {
                success: false,
                message: "Nenhum usuário ou carrinho correspondente foi modificado.".to_string(),
            }),
        )
    };

    Ok(response)
}

// =============================================================================
//  CARRINHOS DE ACORDO
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartPayload {
    #[validate(email(message = "invalid_email"))]
    pub email: String,

    #[validate(length(min = 1, message = "required"))]
    pub menu_id: String,

    #[serde(rename = "floor")]
    pub floor_no: i32,

    #[serde(rename = "block")]
    #[validate(length(min = 1, message = "required"))]
    pub block_name: String,

    #[serde(rename = "room")]
    #[validate(length(min = 1, message = "required"))]
    pub apartment_no: String,

    pub rent: Decimal,
}

// POST /agreementCarts
#[utoipa::path(
    post,
    path = "/agreementCarts",
    tag = "Agreements",
    request_body = CreateCartPayload,
    responses((status = 200, description = "Pedido de aluguel criado", body = InsertResult))
)]
pub async fn create_cart(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCartPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cart = app_state
        .agreement_repo
        .create_cart(
            &payload.email,
            &payload.menu_id,
            payload.floor_no,
            &payload.block_name,
            &payload.apartment_no,
            payload.rent,
        )
        .await?;

    Ok(Json(InsertResult::new(cart.id)))
}

#[derive(Debug, Deserialize)]
pub struct CartListQuery {
    // Ausente = lista tudo (variante do painel do admin)
    pub email: Option<String>,
}

// GET /agreementCarts
#[utoipa::path(
    get,
    path = "/agreementCarts",
    tag = "Agreements",
    params(("email" = Option<String>, Query, description = "Filtro opcional por e-mail")),
    responses((status = 200, description = "Pedidos de aluguel", body = Vec<AgreementCart>))
)]
pub async fn list_carts(
    State(app_state): State<AppState>,
    Query(query): Query<CartListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let carts = app_state
        .agreement_repo
        .list_carts(query.email.as_deref())
        .await?;
    Ok(Json(carts))
}

// DELETE /agreementCarts/{id}
#[utoipa::path(
    delete,
    path = "/agreementCarts/{id}",
    tag = "Agreements",
    params(("id" = Uuid, Path, description = "Id do carrinho")),
    responses((status = 200, description = "Resultado da exclusão", body = DeleteResult))
)]
pub async fn delete_cart(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.agreement_repo.delete_cart(id).await?;
    Ok(Json(DeleteResult {
        deleted_count: deleted,
    }))
}

// GET /agreementDetails/{id}
// O frontend busca pelo id do anúncio (menuId), não pela chave do carrinho.
#[utoipa::path(
    get,
    path = "/agreementDetails/{id}",
    tag = "Agreements",
    params(("id" = String, Path, description = "menuId do anúncio")),
    responses((status = 200, description = "Carrinho correspondente, ou null", body = AgreementCart))
)]
pub async fn agreement_details(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cart = app_state.agreement_repo.find_cart_by_menu_id(&id).await?;
    Ok(Json(cart))
}

// =============================================================================
//  VIEWS DE ACORDO (aguardando pagamento)
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateViewPayload {
    #[validate(email(message = "invalid_email"))]
    pub email: String,

    #[serde(rename = "floor")]
    pub floor_no: i32,

    #[serde(rename = "block")]
    #[validate(length(min = 1, message = "required"))]
    pub block_name: String,

    #[serde(rename = "room")]
    #[validate(length(min = 1, message = "required"))]
    pub apartment_no: String,

    pub rent: Decimal,
}

// POST /agreementView
#[utoipa::path(
    post,
    path = "/agreementView",
    tag = "Agreements",
    request_body = CreateViewPayload,
    responses((status = 200, description = "View criada", body = InsertResult))
)]
pub async fn create_view(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateViewPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let view = app_state
        .agreement_repo
        .create_view(
            &payload.email,
            payload.floor_no,
            &payload.block_name,
            &payload.apartment_no,
            payload.rent,
        )
        .await?;

    Ok(Json(InsertResult::new(view.id)))
}

#[derive(Debug, Deserialize)]
pub struct ViewListQuery {
    pub email: String,
}

// GET /agreementView
#[utoipa::path(
    get,
    path = "/agreementView",
    tag = "Agreements",
    params(("email" = String, Query, description = "E-mail do morador")),
    responses((status = 200, description = "Acordos aguardando pagamento", body = Vec<AgreementView>))
)]
pub async fn list_views(
    State(app_state): State<AppState>,
    Query(query): Query<ViewListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let views = app_state.agreement_repo.list_views(&query.email).await?;
    Ok(Json(views))
}

// DELETE /agreementView/{id}
#[utoipa::path(
    delete,
    path = "/agreementView/{id}",
    tag = "Agreements",
    params(("id" = Uuid, Path, description = "Id da view")),
    responses((status = 200, description = "Resultado da exclusão", body = DeleteResult))
)]
pub async fn delete_view(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = app_state.agreement_repo.delete_view(id).await?;
    Ok(Json(DeleteResult {
        deleted_count: deleted,
    }))
}
