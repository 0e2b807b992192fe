use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};
use utoipa::OpenApi;

use super::{
    dto::{CreateReadingRequest, LatestReadingResponse, NoReadingMessage, ReadingDto},
    errors::ApiError,
};
use crate::reading_store::ReadingStore;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Record a new temperature reading. The timestamp is assigned by the server.
#[utoipa::path(
    post,
    path = "/readings",
    request_body = CreateReadingRequest,
    responses(
        (status = 201, description = "Reading recorded", body = ReadingDto),
        (status = 400, description = "Malformed JSON body"),
        (status = 415, description = "Missing JSON content type"),
        (status = 422, description = "Body has the wrong shape or a blank deviceId"),
    ),
    tag = "readings"
)]
pub async fn create_reading(
    State(store): State<ReadingStore>,
    payload: Result<Json<CreateReadingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReadingDto>), ApiError> {
    let Json(body) = payload.inspect_err(|e| warn!(error = %e, "Rejected reading body"))?;

    if let Err(e) = body.validate() {
        warn!(device_id = ?body.device_id, error = %e, "Rejected reading");
        return Err(e);
    }

    let reading = store.record(body.device_id, body.temperature).await;
    Ok((StatusCode::CREATED, Json(reading.into())))
}

/// Fetch the most recent reading for a device.
///
/// A device with no readings is answered with `200` and an informational
/// message rather than an error status.
#[utoipa::path(
    get,
    path = "/readings/{device_id}",
    params(
        ("device_id" = String, Path, description = "Device ID"),
    ),
    responses(
        (status = 200, description = "Latest reading, or a message when the device has none", body = LatestReadingResponse),
    ),
    tag = "readings"
)]
pub async fn get_latest_reading(
    State(store): State<ReadingStore>,
    Path(device_id): Path<String>,
) -> Json<LatestReadingResponse> {
    let latest = store.latest(&device_id).await;
    if latest.is_none() {
        debug!(device_id = %device_id, "No readings for device");
    }
    Json(latest.into())
}

/// Fetch every reading recorded so far, in the order they were received.
#[utoipa::path(
    get,
    path = "/readings",
    responses(
        (status = 200, description = "All readings in insertion order", body = Vec<ReadingDto>),
    ),
    tag = "readings"
)]
pub async fn get_all_readings(State(store): State<ReadingStore>) -> Json<Vec<ReadingDto>> {
    Json(store.all().await.into_iter().map(Into::into).collect())
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Returns `200 OK` with `{"status":"ok"}` when the server is running.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "system"
)]
pub async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(create_reading, get_latest_reading, get_all_readings, health),
    components(schemas(ReadingDto, CreateReadingRequest, LatestReadingResponse, NoReadingMessage)),
    tags(
        (name = "readings", description = "Temperature reading endpoints"),
        (name = "system",   description = "System endpoints"),
    ),
    info(
        title = "Temperature Readings API",
        version = "0.1.0",
        description = "REST API for device temperature telemetry"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
