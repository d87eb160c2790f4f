use sqlx::SqlitePool;

use crate::dto::athlete::AthleteRequest;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

pub struct AthleteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all athletes
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, name, grade, personal_record, events
            FROM athletes
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, name, grade, personal_record, events
            FROM athletes
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete
    pub async fn create(&self, req: &AthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (name, grade, personal_record, events)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, grade, personal_record, events
            "#,
        )
        .bind(&req.name)
        .bind(req.grade)
        .bind(&req.personal_record)
        .bind(&req.events)
        .fetch_one(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Overwrite every mutable field of an existing athlete
    pub async fn update(&self, id: i64, req: &AthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE athletes
            SET name = ?2,
                grade = ?3,
                personal_record = ?4,
                events = ?5
            WHERE id = ?1
            RETURNING id, name, grade, personal_record, events
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.grade)
        .bind(&req.personal_record)
        .bind(&req.events)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Delete an athlete by ID, returning the number of rows removed (0 or 1).
    /// Results pointing at the athlete keep their row with a null reference.
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_database;

    fn jane() -> AthleteRequest {
        AthleteRequest {
            name: "Jane Doe".to_string(),
            grade: Some(9),
            personal_record: None,
            events: Some("5K".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let db = test_database().await;
        let repo = AthleteRepository::new(db.pool());

        let created = repo.create(&jane()).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(created, found);
        assert_eq!(found.name, "Jane Doe");
        assert_eq!(found.grade, Some(9));
        assert_eq!(found.personal_record, None);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let db = test_database().await;
        let repo = AthleteRepository::new(db.pool());

        let first = repo.create(&jane()).await.unwrap();
        assert_eq!(repo.delete(first.id).await.unwrap(), 1);
        let second = repo.create(&jane()).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let db = test_database().await;
        let repo = AthleteRepository::new(db.pool());

        let err = repo.find_by_id(42).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let db = test_database().await;
        let repo = AthleteRepository::new(db.pool());
        let created = repo.create(&jane()).await.unwrap();

        let updated = repo
            .update(
                created.id,
                &AthleteRequest {
                    name: "Jane Smith".to_string(),
                    grade: None,
                    personal_record: Some("18:30".to_string()),
                    events: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Jane Smith");
        assert_eq!(updated.grade, None);
        assert_eq!(updated.personal_record.as_deref(), Some("18:30"));
        assert_eq!(updated.events, None);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = test_database().await;
        let repo = AthleteRepository::new(db.pool());

        let err = repo.update(99, &jane()).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = test_database().await;
        let repo = AthleteRepository::new(db.pool());
        let created = repo.create(&jane()).await.unwrap();

        assert_eq!(repo.delete(created.id).await.unwrap(), 1);
        assert_eq!(repo.delete(created.id).await.unwrap(), 0);
        assert!(repo.list().await.unwrap().is_empty());
    }
}
