//! # HTTP Gateway
//!
//! Axum server exposing the spacecraft service. Handlers decode the
//! request, call the service, and map failures to status codes.
//!
//! # Endpoints
//!
//! - `GET /` - List spacecraft (optional `name`, `class`, `status` filters)
//! - `GET /{id}` - Fetch one spacecraft
//! - `PUT /` (or `POST /`) - Create a spacecraft
//! - `PATCH /{id}` - Replace a spacecraft
//! - `DELETE /{id}` - Delete a spacecraft
//! - `GET /health` - Health check

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use response::{ErrorResponse, HealthResponse, SuccessResponse};
pub use server::{build_router, HttpServer};
