use std::sync::Arc;

use axum::{Json, Router, extract::FromRef, routing::get};
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::auth::Authenticator;
use crate::features;

/// Everything a handler may need, built once at startup.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Database,
    pub auth: Arc<Authenticator>,
}

impl AppState {
    pub fn new(db: Database, auth: Authenticator) -> Self {
        Self {
            db,
            auth: Arc::new(auth),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::handlers::health,
        features::auth::handlers::login,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::meets::handlers::list_meets,
        features::meets::handlers::get_meet,
        features::meets::handlers::create_meet,
        features::meets::handlers::update_meet,
        features::meets::handlers::delete_meet,
        features::results::handlers::list_results,
        features::results::handlers::list_meet_results,
        features::results::handlers::get_result,
        features::results::handlers::create_result,
        features::results::handlers::update_result,
        features::results::handlers::delete_result,
    ),
    components(
        schemas(
            features::health::handlers::HealthResponse,
            features::auth::handlers::LoginRequest,
            features::auth::handlers::LoginResponse,
            storage::dto::athlete::AthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::meet::MeetRequest,
            storage::dto::meet::MeetResponse,
            storage::dto::result::ResultRequest,
            storage::dto::result::ResultResponse,
            storage::dto::result::MeetResultResponse,
            storage::dto::common::MessageResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "auth", description = "Administrator login"),
        (name = "athletes", description = "Team roster"),
        (name = "meets", description = "Competition calendar"),
        (name = "results", description = "Race results"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Opaque token")
                        .build(),
                ),
            )
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn build_router(state: AppState) -> Router {
    let auth = state.auth.clone();

    let api = Router::new()
        .merge(features::health::routes::routes())
        .nest("/auth", features::auth::routes::routes())
        .nest("/athletes", features::athletes::routes::routes(auth.clone()))
        .nest(
            "/meets",
            features::meets::routes::routes(auth.clone())
                .merge(features::results::routes::meet_routes()),
        )
        .nest("/results", features::results::routes::routes(auth));

    Router::new()
        .merge(features::health::routes::routes())
        .nest("/api", api)
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
