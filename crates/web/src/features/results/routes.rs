use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_result, delete_result, get_result, list_meet_results, list_results, update_result,
};
use crate::app::AppState;
use crate::auth::Authenticator;
use crate::middleware::auth::require_auth;

pub fn routes(auth: Arc<Authenticator>) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_result))
        .route("/:id", put(update_result))
        .route("/:id", delete(delete_result))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new()
        .route("/", get(list_results))
        .route("/:id", get(get_result))
        .merge(protected)
}

/// Mounted under `/api/meets`
pub fn meet_routes() -> Router<AppState> {
    Router::new().route("/:id/results", get(list_meet_results))
}
