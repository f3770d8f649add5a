//! Per-level CRUD routes built from the descriptor table, plus the tree read and bulk upload.

use crate::config::Level;
use crate::handlers::{create_node, delete_node, get_curriculums, update_node, upload_curriculums};
use crate::state::AppState;
use axum::{
    routing::{post, put},
    Extension, Router,
};

pub fn level_routes() -> Router<AppState> {
    let mut router = Router::new().route("/curriculum/upload", post(upload_curriculums));
    for level in Level::ALL {
        let segment = level.descriptor().path_segment;
        let mut collection = post(create_node);
        if level == Level::Curriculum {
            collection = collection.get(get_curriculums);
        }
        router = router
            .route(&format!("/{}", segment), collection.layer(Extension(level)))
            .route(
                &format!("/{}/:id", segment),
                put(update_node).delete(delete_node).layer(Extension(level)),
            );
    }
    router
}
