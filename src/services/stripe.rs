// src/services/stripe.rs
//
// Cliente mínimo da API do Stripe: só o que o fluxo de pagamento usa
// (criação de PaymentIntent). Autenticação por chave secreta no header.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

use crate::common::error::AppError;

const BASE_URL: &str = "https://api.stripe.com/v1";

#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
}

// Só os campos que consumimos da resposta do Stripe
#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

impl StripeClient {
    pub fn new(secret_key: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {secret_key}"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    // Cria um PaymentIntent com o valor já em centavos inteiros.
    pub async fn create_payment_intent(
        &self,
        amount_cents: i64,
    ) -> Result<PaymentIntent, AppError> {
        let params = [
            ("amount", amount_cents.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(format!("{BASE_URL}/payment_intents"))
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::PaymentGateway(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::PaymentGateway(format!("status {status}: {body}")));
        }

        response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| AppError::PaymentGateway(e.to_string()))
    }
}

// Converte o preço para centavos inteiros, TRUNCANDO (19.99 -> 1999,
// 10.999 -> 1099). A conta é feita em Decimal: em f64, 19.99 * 100
// truncado daria 1998.
pub fn price_to_cents(price: Decimal) -> Option<i64> {
    if price <= Decimal::ZERO {
        return None;
    }
    (price * Decimal::from(100)).trunc().to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn preco_em_centavos_trunca_sem_arredondar() {
        assert_eq!(price_to_cents(dec("19.99")), Some(1999));
        assert_eq!(price_to_cents(dec("10.999")), Some(1099));
        assert_eq!(price_to_cents(dec("0.01")), Some(1));
        assert_eq!(price_to_cents(dec("850")), Some(85000));
    }

    #[test]
    fn preco_nao_positivo_e_rejeitado() {
        assert_eq!(price_to_cents(Decimal::ZERO), None);
        assert_eq!(price_to_cents(dec("-5.00")), None);
    }
}
