use crate::{common::error::AppError, models::coupon::Coupon};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CouponRepository {
    pool: PgPool,
}

impl CouponRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Coupon>, AppError> {
        let coupons = sqlx::query_as::<_, Coupon>("SELECT * FROM coupons ORDER BY coupon_code ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(coupons)
    }

    pub async fn create(
        &self,
        coupon_code: &str,
        discount: i32,
        description: &str,
    ) -> Result<Coupon, AppError> {
        let coupon = sqlx::query_as::<_, Coupon>(
            r#"
            INSERT INTO coupons (coupon_code, discount, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(coupon_code)
        .bind(discount)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(coupon)
    }

    // Validação é por correspondência exata do código
    pub async fn find_by_code(&self, coupon_code: &str) -> Result<Option<Coupon>, AppError> {
        let coupon = sqlx::query_as::<_, Coupon>("SELECT * FROM coupons WHERE coupon_code = $1")
            .bind(coupon_code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(coupon)
    }

    pub async fn set_available(&self, id: Uuid, available: bool) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE coupons SET available = $1 WHERE id = $2")
            .bind(available)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM coupons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
