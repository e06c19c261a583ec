// src/db/stats_repo.rs

use crate::{common::error::AppError, models::stats::AdminStats};
use sqlx::PgPool;

#[derive(Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // As três contagens rodam numa transação para sair um snapshot
    // consistente dos dados.
    pub async fn admin_stats(&self) -> Result<AdminStats, AppError> {
        let mut tx = self.pool.begin().await?;

        let total_apartment: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM apartments")
            .fetch_one(&mut *tx)
            .await?;

        let total_user: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;

        let total_member: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'member'")
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(AdminStats {
            total_apartment,
            total_user,
            total_member,
        })
    }
}
