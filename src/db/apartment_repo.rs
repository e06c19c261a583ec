use crate::{common::error::AppError, models::apartment::Apartment};
use sqlx::PgPool;

#[derive(Clone)]
pub struct ApartmentRepository {
    pool: PgPool,
}

impl ApartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Apartment>, AppError> {
        let apartments = sqlx::query_as::<_, Apartment>(
            "SELECT * FROM apartments ORDER BY block_name ASC, floor_no ASC, apartment_no ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(apartments)
    }
}
