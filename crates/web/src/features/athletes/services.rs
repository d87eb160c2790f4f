use sqlx::SqlitePool;
use storage::{dto::athlete::AthleteRequest, models::Athlete, repository::AthleteRepository};

use crate::error::{WebError, WebResult};

/// List all athletes
pub async fn list_athletes(pool: &SqlitePool) -> WebResult<Vec<Athlete>> {
    let repo = AthleteRepository::new(pool);
    Ok(repo.list().await?)
}

/// Get athlete by ID
pub async fn get_athlete(pool: &SqlitePool, id: i64) -> WebResult<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id)
        .await
        .map_err(WebError::not_found("athlete"))
}

/// Create a new athlete
pub async fn create_athlete(pool: &SqlitePool, request: &AthleteRequest) -> WebResult<Athlete> {
    let repo = AthleteRepository::new(pool);
    Ok(repo.create(request).await?)
}

/// Replace every field of an athlete
pub async fn update_athlete(
    pool: &SqlitePool,
    id: i64,
    request: &AthleteRequest,
) -> WebResult<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.update(id, request)
        .await
        .map_err(WebError::not_found("athlete"))
}

/// Delete an athlete; deleting an unknown ID is a 404
pub async fn delete_athlete(pool: &SqlitePool, id: i64) -> WebResult<()> {
    let repo = AthleteRepository::new(pool);
    match repo.delete(id).await? {
        0 => Err(WebError::NotFound("athlete")),
        _ => Ok(()),
    }
}
