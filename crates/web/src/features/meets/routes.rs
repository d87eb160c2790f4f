use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{create_meet, delete_meet, get_meet, list_meets, update_meet};
use crate::app::AppState;
use crate::auth::Authenticator;
use crate::middleware::auth::require_auth;

pub fn routes(auth: Arc<Authenticator>) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_meet))
        .route("/:id", put(update_meet))
        .route("/:id", delete(delete_meet))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new()
        .route("/", get(list_meets))
        .route("/:id", get(get_meet))
        .merge(protected)
}
