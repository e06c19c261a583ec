use crate::{common::error::AppError, models::announcement::Announcement};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AnnouncementRepository {
    pool: PgPool,
}

impl AnnouncementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, title: &str, description: &str) -> Result<Announcement, AppError> {
        let announcement = sqlx::query_as::<_, Announcement>(
            r#"
            INSERT INTO announcements (title, description)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(announcement)
    }

    pub async fn list_all(&self) -> Result<Vec<Announcement>, AppError> {
        let announcements = sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(announcements)
    }
}
