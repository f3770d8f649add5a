//! Common routes: health.

use crate::handlers::health;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn common_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
