//! Statement execution and the insert seam shared by create and bulk import.

use crate::error::AppError;
use crate::model::NewNode;
use crate::sql::{insert, QueryBuf};
use async_trait::async_trait;
use sqlx::PgConnection;

/// Persists one new row. Implemented for a PostgreSQL connection; bulk import is written
/// against this trait so a whole batch runs on one acquired connection.
#[async_trait]
pub trait NodeWriter: Send {
    async fn insert_node(&mut self, node: &NewNode<'_>) -> Result<(), AppError>;
}

#[async_trait]
impl NodeWriter for PgConnection {
    async fn insert_node(&mut self, node: &NewNode<'_>) -> Result<(), AppError> {
        execute(self, &insert(node)).await?;
        Ok(())
    }
}

/// Run a builder statement, returning rows affected.
pub async fn execute(conn: &mut PgConnection, q: &QueryBuf) -> Result<u64, AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    let result = query.execute(&mut *conn).await?;
    Ok(result.rows_affected())
}
