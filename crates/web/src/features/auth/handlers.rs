use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Authenticator;
use crate::error::WebError;
use crate::extract::JsonBody;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted, bearer token issued", body = LoginResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(auth): State<Arc<Authenticator>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Response, WebError> {
    // Argon2 verification is CPU bound
    let token = tokio::task::spawn_blocking(move || auth.login(&req.username, &req.password))
        .await
        .map_err(|e| WebError::InternalServerError(e.to_string()))?;

    match token {
        Some(token) => {
            tracing::info!("Admin login succeeded");
            Ok(Json(LoginResponse { token }).into_response())
        }
        None => {
            tracing::warn!("Admin login failed");
            Err(WebError::InvalidCredentials)
        }
    }
}
