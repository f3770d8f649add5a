//! Router assembly: API prefix, fallback, and middleware.

mod common;
mod levels;
pub use common::common_routes;
pub use levels::level_routes;

use crate::config::Settings;
use crate::error::{ConfigError, ErrorBody, INTERNAL_ERROR_MESSAGE, ROUTE_NOT_FOUND_MESSAGE};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub const API_PREFIX: &str = "/api";

/// Upper bound for request bodies; bulk uploads carry whole curriculum trees.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new(ROUTE_NOT_FOUND_MESSAGE)))
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}

pub fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.into()))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Full application: all routes under `/api`, JSON 404 fallback, and the middleware stack.
pub fn app(state: AppState, settings: &Settings) -> Result<Router, ConfigError> {
    let api = Router::new().merge(common_routes()).merge(level_routes());
    Ok(Router::new()
        .nest(API_PREFIX, api)
        .fallback(route_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.cors_origin)?))
}
