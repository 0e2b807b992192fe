pub mod dto;
pub mod errors;
pub mod handlers;

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::reading_store::ReadingStore;
use handlers::ApiDoc;

pub fn router(store: ReadingStore) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .route(
            "/readings",
            get(handlers::get_all_readings).post(handlers::create_reading),
        )
        .route("/readings/{device_id}", get(handlers::get_latest_reading))
        .with_state(store)
        .split_for_parts();

    router
        .route("/health", get(handlers::health))
        .route(
            "/api-docs/openapi.json",
            get(move || async move { axum::Json(api) }),
        )
}
