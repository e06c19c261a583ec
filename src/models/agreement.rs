// src/models/agreement.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Mapeia o CREATE TYPE cart_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "cart_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CartStatus {
    Pending,
    Checked,
}

// Pedido de aluguel pendente (o "carrinho" de acordo).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgreementCart {
    pub id: Uuid,
    pub email: String,

    // Id do anúncio de apartamento que originou o pedido
    pub menu_id: String,

    #[serde(rename = "floor")]
    pub floor_no: i32,

    #[serde(rename = "block")]
    pub block_name: String,

    #[serde(rename = "room")]
    pub apartment_no: String,

    pub rent: Decimal,
    pub status: CartStatus,
    pub created_at: DateTime<Utc>,
}

// Registro criado quando um acordo é aceito. Aceitações repetidas criam
// linhas novas; o perfil do membro lê sempre a mais recente.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberAgreement {
    pub id: Uuid,
    pub email: String,
    pub agreement_date: DateTime<Utc>,

    #[serde(rename = "floor")]
    pub floor_no: i32,

    #[serde(rename = "block")]
    pub block_name: String,

    #[serde(rename = "room")]
    pub apartment_no: String,

    pub rent: Decimal,
    pub created_at: DateTime<Utc>,
}

// Acordo aceito aguardando pagamento. Apagado em bloco quando o pagamento
// do e-mail correspondente é registrado.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgreementView {
    pub id: Uuid,
    pub email: String,

    #[serde(rename = "floor")]
    pub floor_no: i32,

    #[serde(rename = "block")]
    pub block_name: String,

    #[serde(rename = "room")]
    pub apartment_no: String,

    pub rent: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AcceptAgreementResponse {
    pub success: bool,
    pub message: String,
}
