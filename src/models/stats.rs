// src/models/stats.rs

use serde::Serialize;
use utoipa::ToSchema;

// Painel do administrador: três contagens, tiradas num snapshot único.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_apartment: i64,
    pub total_user: i64,
    pub total_member: i64,
}
