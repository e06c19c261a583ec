// src/models/coupon.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Cupom de desconto, resgatável por correspondência exata de código.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: Uuid,
    pub coupon_code: String,

    // Percentual de desconto (0 a 100)
    pub discount: i32,

    pub description: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidateCouponResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i32>,

    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponResponse {
    pub success: bool,
    pub inserted_id: Uuid,
}
