use sqlx::SqlitePool;
use storage::{dto::meet::MeetRequest, models::Meet, repository::MeetRepository};

use crate::error::{WebError, WebResult};

pub async fn list_meets(pool: &SqlitePool) -> WebResult<Vec<Meet>> {
    let repo = MeetRepository::new(pool);
    Ok(repo.list().await?)
}

pub async fn get_meet(pool: &SqlitePool, id: i64) -> WebResult<Meet> {
    let repo = MeetRepository::new(pool);
    repo.find_by_id(id).await.map_err(WebError::not_found("meet"))
}

pub async fn create_meet(pool: &SqlitePool, request: &MeetRequest) -> WebResult<Meet> {
    let repo = MeetRepository::new(pool);
    Ok(repo.create(request).await?)
}

pub async fn update_meet(pool: &SqlitePool, id: i64, request: &MeetRequest) -> WebResult<Meet> {
    let repo = MeetRepository::new(pool);
    repo.update(id, request)
        .await
        .map_err(WebError::not_found("meet"))
}

/// Results of the meet stay behind with a null meet reference
pub async fn delete_meet(pool: &SqlitePool, id: i64) -> WebResult<()> {
    let repo = MeetRepository::new(pool);
    match repo.delete(id).await? {
        0 => Err(WebError::NotFound("meet")),
        _ => Ok(()),
    }
}
