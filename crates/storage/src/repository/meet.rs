use sqlx::SqlitePool;

use crate::dto::meet::MeetRequest;
use crate::error::{Result, StorageError};
use crate::models::Meet;

/// Repository for Meet database operations
pub struct MeetRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MeetRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Meet>> {
        let meets = sqlx::query_as::<_, Meet>(
            r#"
            SELECT id, name, date, location
            FROM meets
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(meets)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Meet> {
        let meet = sqlx::query_as::<_, Meet>(
            r#"
            SELECT id, name, date, location
            FROM meets
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(meet)
    }

    pub async fn create(&self, req: &MeetRequest) -> Result<Meet> {
        let meet = sqlx::query_as::<_, Meet>(
            r#"
            INSERT INTO meets (name, date, location)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, date, location
            "#,
        )
        .bind(&req.name)
        .bind(&req.date)
        .bind(&req.location)
        .fetch_one(self.pool)
        .await?;

        Ok(meet)
    }

    pub async fn update(&self, id: i64, req: &MeetRequest) -> Result<Meet> {
        let meet = sqlx::query_as::<_, Meet>(
            r#"
            UPDATE meets
            SET name = ?2,
                date = ?3,
                location = ?4
            WHERE id = ?1
            RETURNING id, name, date, location
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.date)
        .bind(&req.location)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(meet)
    }

    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM meets WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
