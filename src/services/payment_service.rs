// src/services/payment_service.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{AgreementRepository, PaymentRepository},
    models::payment::{Payment, PaymentIntentResponse},
    services::stripe::{StripeClient, price_to_cents},
};

#[derive(Clone)]
pub struct PaymentService {
    payment_repo: PaymentRepository,
    agreement_repo: AgreementRepository,
    stripe: StripeClient,
}

impl PaymentService {
    pub fn new(
        payment_repo: PaymentRepository,
        agreement_repo: AgreementRepository,
        stripe: StripeClient,
    ) -> Self {
        Self {
            payment_repo,
            agreement_repo,
            stripe,
        }
    }

    // POST /create-payment-intent: valor em centavos inteiros, truncado.
    pub async fn create_payment_intent(
        &self,
        price: Decimal,
    ) -> Result<PaymentIntentResponse, AppError> {
        let amount = price_to_cents(price).ok_or(AppError::InvalidAmount)?;
        let intent = self.stripe.create_payment_intent(amount).await?;
        tracing::debug!("PaymentIntent {} criado ({} centavos)", intent.id, amount);
        Ok(PaymentIntentResponse {
            client_secret: intent.client_secret,
        })
    }

    // Registra o pagamento e apaga as views pendentes do e-mail na MESMA
    // transação: ou o pagamento entra e os lembretes somem, ou nada acontece.
    // Devolve também quantas views foram resolvidas, para o log.
    pub async fn record_payment(
        &self,
        pool: &PgPool,
        email: &str,
        price: Decimal,
        month: Option<&str>,
        apartment_no: Option<&str>,
        transaction_id: Option<&str>,
    ) -> Result<(Payment, u64), AppError> {
        let mut tx = pool.begin().await?;

        let payment = self
            .payment_repo
            .insert(&mut *tx, email, price, month, apartment_no, transaction_id)
            .await?;

        let cleared = self
            .agreement_repo
            .delete_views_by_email(&mut *tx, email)
            .await?;

        tx.commit().await?;

        Ok((payment, cleared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sqlx::PgPool;

    fn rent(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn service(pool: &PgPool) -> (PaymentService, AgreementRepository, PaymentRepository) {
        let agreement_repo = AgreementRepository::new(pool.clone());
        let payment_repo = PaymentRepository::new(pool.clone());
        // Chave falsa: record_payment não fala com o gateway
        let stripe = StripeClient::new("sk_test_chave_falsa").unwrap();
        (
            PaymentService::new(payment_repo.clone(), agreement_repo.clone(), stripe),
            agreement_repo,
            payment_repo,
        )
    }

    #[sqlx::test]
    async fn pagamento_limpa_todas_as_views_do_email(pool: PgPool) {
        let (service, agreement_repo, payment_repo) = service(&pool);

        // Várias views pendentes do mesmo e-mail, mais uma de outro morador
        agreement_repo
            .create_view("maria@email.com", 3, "B", "302", rent("850.00"))
            .await
            .unwrap();
        agreement_repo
            .create_view("maria@email.com", 3, "B", "302", rent("850.00"))
            .await
            .unwrap();
        agreement_repo
            .create_view("joao@email.com", 1, "A", "103", rent("700.00"))
            .await
            .unwrap();

        let (payment, cleared) = service
            .record_payment(
                &pool,
                "maria@email.com",
                rent("850.00"),
                Some("Agosto"),
                Some("302"),
                None,
            )
            .await
            .unwrap();
        assert_eq!(cleared, 2);

        // Todas as views do e-mail pago sumiram; as dos outros ficam
        assert!(
            agreement_repo
                .list_views("maria@email.com")
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(agreement_repo.list_views("joao@email.com").await.unwrap().len(), 1);

        let payments = payment_repo.list_all().await.unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].id, payment.id);
    }

    #[sqlx::test]
    async fn pagamento_sem_views_pendentes_ainda_e_registrado(pool: PgPool) {
        let (service, _, payment_repo) = service(&pool);

        let (_, cleared) = service
            .record_payment(&pool, "ana@email.com", rent("500.00"), None, None, None)
            .await
            .unwrap();
        assert_eq!(cleared, 0);
        assert_eq!(payment_repo.list_all().await.unwrap().len(), 1);
    }
}
