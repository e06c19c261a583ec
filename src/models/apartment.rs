// src/models/apartment.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Anúncio de apartamento. Somente leitura neste núcleo; os dados são
// semeados externamente.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    pub id: Uuid,
    pub apartment_image: Option<String>,
    pub floor_no: i32,
    pub block_name: String,
    pub apartment_no: String,
    pub rent: Decimal,
}
