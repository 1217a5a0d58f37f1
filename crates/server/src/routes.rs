use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::address::{AddressRepository, AddressService};

use crate::openapi::ApiDoc;

pub mod address;

/// Shared handler state. The repository (and the connection pool behind it)
/// is created once at startup and handed in here.
#[derive(Clone)]
pub struct ServerState {
    pub addresses: AddressService<dyn AddressRepository>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn AddressRepository>) -> Self {
        Self { addresses: AddressService::new(repo) }
    }
}

pub async fn root() -> Json<&'static str> {
    Json("Address Book")
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    let addresses = Router::new()
        .route("/address", get(address::list).post(address::create))
        .route(
            "/address/:id",
            get(address::get).put(address::update).delete(address::delete),
        )
        .route("/find_distance", get(address::find_distance));

    public
        .merge(addresses)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request at INFO, headers left out
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
