//! Generic single-row create/update/delete for any level. One statement each, auto-committed.

use crate::config::Level;
use crate::error::AppError;
use crate::model::{NewNode, NodeAttributes, NodeInput};
use crate::service::{execute, NodeWriter};
use crate::sql::{delete, update};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CrudService;

impl CrudService {
    /// Insert one row with a server-generated id. Returns the created representation.
    pub async fn create(pool: &PgPool, level: Level, input: &NodeInput) -> Result<Value, AppError> {
        let fields = input.attributes.fields(level)?;
        let parent_id = input.parent_id(level)?;
        let node = NewNode::new(level, parent_id, fields);
        let mut conn = pool.acquire().await?;
        NodeWriter::insert_node(&mut *conn, &node).await?;
        tracing::info!(level = ?level, id = %node.id, "created");
        Ok(node.to_json())
    }

    /// Full-replace update by id. Omitted fields are written as NULL.
    /// Returns rows affected; zero for an unknown id.
    pub async fn update(
        pool: &PgPool,
        level: Level,
        id: Uuid,
        attributes: &NodeAttributes,
    ) -> Result<u64, AppError> {
        let fields = attributes.fields(level)?;
        let q = update(level, id, &fields);
        let mut conn = pool.acquire().await?;
        let affected = execute(&mut *conn, &q).await?;
        tracing::info!(level = ?level, id = %id, affected, "updated");
        Ok(affected)
    }

    /// Delete one row by id. Returns rows affected; zero for an unknown id.
    pub async fn delete(pool: &PgPool, level: Level, id: Uuid) -> Result<u64, AppError> {
        let q = delete(level, id);
        let mut conn = pool.acquire().await?;
        let affected = execute(&mut *conn, &q).await?;
        tracing::info!(level = ?level, id = %id, affected, "deleted");
        Ok(affected)
    }
}
