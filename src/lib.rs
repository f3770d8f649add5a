//! Curriculum API: CRUD over a seven-level curriculum hierarchy, a nested tree read,
//! and bulk import of nested curriculum documents, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Level, LevelDescriptor, Settings};
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, level_routes, API_PREFIX};
pub use service::{load_tree, BulkImporter, CrudService, ImportReport, NodeWriter, TreeAssembler};
pub use state::AppState;
pub use store::{create_pool, ensure_database_exists, ensure_tables};
