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
        result::{MeetResultResponse, ResultRequest, ResultResponse},
    },
};

use crate::error::WebError;
use crate::extract::{JsonBody, parse_id};

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "List all results successfully", body = Vec<ResultResponse>)
    ),
    tag = "results"
)]
pub async fn list_results(State(db): State<Database>) -> Result<Response, WebError> {
    let results = services::list_results(db.pool()).await?;

    let response: Vec<ResultResponse> = results.into_iter().map(ResultResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/meets/{id}/results",
    params(
        ("id" = i64, Path, description = "Meet ID")
    ),
    responses(
        (status = 200, description = "Results of the meet with athlete names", body = Vec<MeetResultResponse>),
        (status = 400, description = "Malformed ID")
    ),
    tag = "results"
)]
pub async fn list_meet_results(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let meet_id = parse_id(&id, "meet")?;
    let results = services::list_meet_results(db.pool(), meet_id).await?;

    let response: Vec<MeetResultResponse> =
        results.into_iter().map(MeetResultResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/results/{id}",
    params(
        ("id" = i64, Path, description = "Result ID")
    ),
    responses(
        (status = 200, description = "Result found", body = ResultResponse),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn get_result(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id, "result")?;
    let result = services::get_result(db.pool(), id).await?;

    Ok(Json(ResultResponse::from(result)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = ResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Result created successfully", body = ResultResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Unknown athlete or meet reference")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(db): State<Database>,
    JsonBody(req): JsonBody<ResultRequest>,
) -> Result<Response, WebError> {
    let result = services::create_result(db.pool(), &req).await?;
    tracing::info!("Created result {}", result.id);

    Ok((StatusCode::CREATED, Json(ResultResponse::from(result))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/{id}",
    params(
        ("id" = i64, Path, description = "Result ID")
    ),
    request_body = ResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result updated successfully", body = ResultResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn update_result(
    State(db): State<Database>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<ResultRequest>,
) -> Result<Response, WebError> {
    let id = parse_id(&id, "result")?;
    let updated = services::update_result(db.pool(), id, &req).await?;

    Ok(Json(ResultResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = i64, Path, description = "Result ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id, "result")?;
    services::delete_result(db.pool(), id).await?;

    Ok(Json(MessageResponse::new("result deleted")).into_response())
}
