use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{create_athlete, delete_athlete, get_athlete, list_athletes, update_athlete};
use crate::app::AppState;
use crate::auth::Authenticator;
use crate::middleware::auth::require_auth;

pub fn routes(auth: Arc<Authenticator>) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_athlete))
        .route("/:id", put(update_athlete))
        .route("/:id", delete(delete_athlete))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    Router::new()
        .route("/", get(list_athletes))
        .route("/:id", get(get_athlete))
        .merge(protected)
}
