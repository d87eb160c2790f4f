use sqlx::SqlitePool;

use crate::dto::result::ResultRequest;
use crate::error::{Result, StorageError};
use crate::models::{MeetResult, RaceResult};

/// Repository for race results
pub struct ResultRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all results
    pub async fn list(&self) -> Result<Vec<RaceResult>> {
        let results = sqlx::query_as::<_, RaceResult>(
            r#"
            SELECT id, athlete_id, meet_id, time, place
            FROM results
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// Results of one meet with the athlete's current name, best place first.
    /// A meet with no results (or no such meet) yields an empty list.
    pub async fn list_by_meet(&self, meet_id: i64) -> Result<Vec<MeetResult>> {
        let results = sqlx::query_as::<_, MeetResult>(
            r#"
            SELECT r.id, r.athlete_id, r.meet_id, r.time, r.place,
                   a.name AS athlete_name
            FROM results r
            LEFT JOIN athletes a ON a.id = r.athlete_id
            WHERE r.meet_id = ?1
            ORDER BY r.place IS NULL, r.place, r.id
            "#,
        )
        .bind(meet_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<RaceResult> {
        let result = sqlx::query_as::<_, RaceResult>(
            r#"
            SELECT id, athlete_id, meet_id, time, place
            FROM results
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    /// Create a new result. Unknown athlete or meet references are rejected
    /// by the foreign key constraints.
    pub async fn create(&self, req: &ResultRequest) -> Result<RaceResult> {
        let result = sqlx::query_as::<_, RaceResult>(
            r#"
            INSERT INTO results (athlete_id, meet_id, time, place)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, athlete_id, meet_id, time, place
            "#,
        )
        .bind(req.athlete_id)
        .bind(req.meet_id)
        .bind(&req.time)
        .bind(req.place)
        .fetch_one(self.pool)
        .await?;

        Ok(result)
    }

    pub async fn update(&self, id: i64, req: &ResultRequest) -> Result<RaceResult> {
        let result = sqlx::query_as::<_, RaceResult>(
            r#"
            UPDATE results
            SET athlete_id = ?2,
                meet_id = ?3,
                time = ?4,
                place = ?5
            WHERE id = ?1
            RETURNING id, athlete_id, meet_id, time, place
            "#,
        )
        .bind(id)
        .bind(req.athlete_id)
        .bind(req.meet_id)
        .bind(&req.time)
        .bind(req.place)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM results WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
