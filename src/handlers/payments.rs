// src/handlers/payments.rs

use axum::{Json, extract::State, response::IntoResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        payment::{Payment, PaymentIntentResponse},
        results::InsertResult,
    },
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentIntentPayload {
    #[schema(example = 19.99)]
    pub price: Decimal,
}

// POST /create-payment-intent
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = "Payments",
    request_body = PaymentIntentPayload,
    responses(
        (status = 200, description = "Segredo do PaymentIntent criado no gateway", body = PaymentIntentResponse),
        (status = 400, description = "Valor não positivo"),
        (status = 502, description = "Falha no gateway de pagamento")
    )
)]
pub async fn create_payment_intent(
    State(app_state): State<AppState>,
    Json(payload): Json<PaymentIntentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let response = app_state
        .payment_service
        .create_payment_intent(payload.price)
        .await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentPayload {
    #[validate(email(message = "invalid_email"))]
    #[schema(example = "maria@email.com")]
    pub email: String,

    pub price: Decimal,

    #[schema(example = "Agosto")]
    pub month: Option<String>,

    #[schema(example = "302")]
    pub apartment_no: Option<String>,

    pub transaction_id: Option<String>,
}

// POST /payments
// Registrar o pagamento resolve os lembretes pendentes: as views de acordo
// do mesmo e-mail são apagadas na mesma transação.
#[utoipa::path(
    post,
    path = "/payments",
    tag = "Payments",
    request_body = CreatePaymentPayload,
    responses((status = 200, description = "Pagamento registrado", body = InsertResult))
)]
pub async fn create_payment(
    State(app_state): State<AppState>,
    Json(payload): Json<CreatePaymentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (payment, cleared) = app_state
        .payment_service
        .record_payment(
            &app_state.db_pool,
            &payload.email,
            payload.price,
            payload.month.as_deref(),
            payload.apartment_no.as_deref(),
            payload.transaction_id.as_deref(),
        )
        .await?;

    tracing::info!(
        "Pagamento {} registrado para {}; {} lembretes resolvidos",
        payment.id,
        payment.email,
        cleared
    );

    Ok(Json(InsertResult::new(payment.id)))
}

// GET /payments
#[utoipa::path(
    get,
    path = "/payments",
    tag = "Payments",
    responses((status = 200, description = "Histórico de pagamentos", body = Vec<Payment>))
)]
pub async fn list_payments(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let payments = app_state.payment_repo.list_all().await?;
    Ok(Json(payments))
}
