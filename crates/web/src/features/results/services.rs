use sqlx::SqlitePool;
use storage::{
    dto::result::ResultRequest,
    models::{MeetResult, RaceResult},
    repository::ResultRepository,
};

use crate::error::{WebError, WebResult};

pub async fn list_results(pool: &SqlitePool) -> WebResult<Vec<RaceResult>> {
    let repo = ResultRepository::new(pool);
    Ok(repo.list().await?)
}

/// Results of one meet, each with its athlete's current name
pub async fn list_meet_results(pool: &SqlitePool, meet_id: i64) -> WebResult<Vec<MeetResult>> {
    let repo = ResultRepository::new(pool);
    Ok(repo.list_by_meet(meet_id).await?)
}

pub async fn get_result(pool: &SqlitePool, id: i64) -> WebResult<RaceResult> {
    let repo = ResultRepository::new(pool);
    repo.find_by_id(id)
        .await
        .map_err(WebError::not_found("result"))
}

pub async fn create_result(pool: &SqlitePool, request: &ResultRequest) -> WebResult<RaceResult> {
    let repo = ResultRepository::new(pool);
    Ok(repo.create(request).await?)
}

pub async fn update_result(
    pool: &SqlitePool,
    id: i64,
    request: &ResultRequest,
) -> WebResult<RaceResult> {
    let repo = ResultRepository::new(pool);
    repo.update(id, request)
        .await
        .map_err(WebError::not_found("result"))
}

pub async fn delete_result(pool: &SqlitePool, id: i64) -> WebResult<()> {
    let repo = ResultRepository::new(pool);
    match repo.delete(id).await? {
        0 => Err(WebError::NotFound("result")),
        _ => Ok(()),
    }
}
