// src/models/payment.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Registro de pagamento (append-only).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub email: String,
    pub price: Decimal,
    pub month: Option<String>,
    pub apartment_no: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Resposta do POST /create-payment-intent
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_secret_usa_a_chave_do_frontend() {
        let resp = PaymentIntentResponse {
            client_secret: "pi_123_secret_abc".into(),
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["clientSecret"], "pi_123_secret_abc");
    }
}
