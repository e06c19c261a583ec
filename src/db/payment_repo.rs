use crate::{common::error::AppError, models::payment::Payment};
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};

#[derive(Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Insert genérico sobre Executor: o serviço registra o pagamento e a
    // limpeza das views na mesma transação.
    pub async fn insert<'e, E>(
        &self,
        executor: E,
        email: &str,
        price: Decimal,
        month: Option<&str>,
        apartment_no: Option<&str>,
        transaction_id: Option<&str>,
    ) -> Result<Payment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (email, price, month, apartment_no, transaction_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(price)
        .bind(month)
        .bind(apartment_no)
        .bind(transaction_id)
        .fetch_one(executor)
        .await?;
        Ok(payment)
    }

    pub async fn list_all(&self) -> Result<Vec<Payment>, AppError> {
        let payments =
            sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(payments)
    }
}
