use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::MessageResponse,
        meet::{MeetRequest, MeetResponse},
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::{JsonBody, parse_id};

use super::services;

#[utoipa::path(
    get,
    path = "/api/meets",
    responses(
        (status = 200, description = "List all meets successfully", body = Vec<MeetResponse>)
    ),
    tag = "meets"
)]
pub async fn list_meets(State(db): State<Database>) -> Result<Response, WebError> {
    let meets = services::list_meets(db.pool()).await?;

    let response: Vec<MeetResponse> = meets.into_iter().map(MeetResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/meets/{id}",
    params(
        ("id" = i64, Path, description = "Meet ID")
    ),
    responses(
        (status = 200, description = "Meet found", body = MeetResponse),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Meet not found")
    ),
    tag = "meets"
)]
pub async fn get_meet(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id, "meet")?;
    let meet = services::get_meet(db.pool(), id).await?;

    Ok(Json(MeetResponse::from(meet)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/meets",
    request_body = MeetRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Meet created successfully", body = MeetResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "meets"
)]
pub async fn create_meet(
    State(db): State<Database>,
    JsonBody(req): JsonBody<MeetRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let meet = services::create_meet(db.pool(), &req).await?;
    tracing::info!("Created meet {}", meet.id);

    Ok((StatusCode::CREATED, Json(MeetResponse::from(meet))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/meets/{id}",
    params(
        ("id" = i64, Path, description = "Meet ID")
    ),
    request_body = MeetRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Meet updated successfully", body = MeetResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Meet not found")
    ),
    tag = "meets"
)]
pub async fn update_meet(
    State(db): State<Database>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<MeetRequest>,
) -> Result<Response, WebError> {
    let id = parse_id(&id, "meet")?;
    req.validate()?;

    let updated = services::update_meet(db.pool(), id, &req).await?;

    Ok(Json(MeetResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/meets/{id}",
    params(
        ("id" = i64, Path, description = "Meet ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Meet deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Meet not found")
    ),
    tag = "meets"
)]
pub async fn delete_meet(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id, "meet")?;
    services::delete_meet(db.pool(), id).await?;
    tracing::info!("Deleted meet {}", id);

    Ok(Json(MessageResponse::new("meet deleted")).into_response())
}
