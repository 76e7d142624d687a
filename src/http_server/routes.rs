//! Spacecraft HTTP Routes
//!
//! Decodes path, query and body, runs the service on the blocking pool
//! and encodes the result.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::spacecraft::{
    Filter, FilterKey, ServiceResult, Spacecraft, SpacecraftDraft, SpacecraftRepository,
    SpacecraftService,
};

use super::errors::{ApiError, ApiResult};
use super::response::{HealthResponse, SuccessResponse};

// ==================
// Shared State
// ==================

/// State shared across spacecraft handlers
pub struct SpacecraftState<R> {
    pub service: Arc<SpacecraftService<R>>,

    /// Reply 204 without a body on delete
    pub delete_no_content: bool,
}

impl<R> SpacecraftState<R> {
    pub fn new(service: Arc<SpacecraftService<R>>, delete_no_content: bool) -> Self {
        Self {
            service,
            delete_no_content,
        }
    }
}

type SharedState<R> = Arc<SpacecraftState<R>>;

// ==================
// Routes
// ==================

/// Create spacecraft routes
pub fn spacecraft_routes<R: SpacecraftRepository + 'static>(state: SharedState<R>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_handler::<R>)
                .put(create_handler::<R>)
                .post(create_handler::<R>),
        )
        .route(
            "/:id",
            get(get_handler::<R>)
                .patch(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .with_state(state)
}

/// Health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Helper Functions
// ==================

/// Collect allow-listed query parameters, in allow-list order
fn collect_filters(query: &HashMap<String, String>) -> Vec<Filter> {
    FilterKey::ALL
        .into_iter()
        .filter_map(|key| {
            query
                .get(key.as_str())
                .filter(|value| !value.is_empty())
                .map(|value| Filter::eq(key, value.as_str()))
        })
        .collect()
}

fn parse_id(path: Result<Path<String>, PathRejection>) -> ApiResult<Uuid> {
    let Path(raw) = path.map_err(|_| ApiError::InvalidId)?;
    Uuid::parse_str(&raw).map_err(|_| ApiError::InvalidId)
}

fn decode_body(
    body: Result<Json<SpacecraftDraft>, JsonRejection>,
) -> ApiResult<SpacecraftDraft> {
    let Json(draft) = body.map_err(|_| ApiError::InvalidBody)?;
    Ok(draft)
}

/// Run a service call on the blocking pool; SQLite calls block
async fn run_blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(format!("service task failed: {}", e)))?
        .map_err(ApiError::from)
}

// ==================
// Handlers
// ==================

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn list_handler<R: SpacecraftRepository + 'static>(
    State(state): State<SharedState<R>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<Spacecraft>>> {
    let filters = collect_filters(&query);
    let service = state.service.clone();

    let spacecrafts = run_blocking(move || service.list(&filters)).await?;
    Ok(Json(spacecrafts))
}

async fn get_handler<R: SpacecraftRepository + 'static>(
    State(state): State<SharedState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Spacecraft>> {
    let id = parse_id(path)?;
    let service = state.service.clone();

    let spacecraft = run_blocking(move || service.get(id)).await?;
    Ok(Json(spacecraft))
}

async fn create_handler<R: SpacecraftRepository + 'static>(
    State(state): State<SharedState<R>>,
    body: Result<Json<SpacecraftDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Spacecraft>)> {
    let draft = decode_body(body)?;
    let service = state.service.clone();

    let created = run_blocking(move || service.create(draft)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_handler<R: SpacecraftRepository + 'static>(
    State(state): State<SharedState<R>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<SpacecraftDraft>, JsonRejection>,
) -> ApiResult<Json<Spacecraft>> {
    let id = parse_id(path)?;
    let draft = decode_body(body)?;
    let service = state.service.clone();

    let updated = run_blocking(move || service.update(id, draft)).await?;
    Ok(Json(updated))
}

async fn delete_handler<R: SpacecraftRepository + 'static>(
    State(state): State<SharedState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Response> {
    let id = parse_id(path)?;
    let service = state.service.clone();

    run_blocking(move || service.delete(id)).await?;

    if state.delete_no_content {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok((StatusCode::OK, Json(SuccessResponse::success())).into_response())
    }
}
