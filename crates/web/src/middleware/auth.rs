use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::auth::Authenticator;
use crate::error::WebError;

/// Rejects the request with 401 unless it carries a bearer token issued by
/// the authenticator. Runs before the handler and its extractors.
pub async fn require_auth(
    State(auth): State<Arc<Authenticator>>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let authorized = extract_bearer(req.headers()).is_some_and(|token| auth.authorize(token));

    if !authorized {
        tracing::warn!("Rejected request to {} {}", req.method(), req.uri().path());
        return Err(WebError::Unauthorized);
    }

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let token = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();

    if token.is_empty() { None } else { Some(token) }
}
