//! Bulk import: nested curriculum documents materialized into the seven tables.
//!
//! Each top-level document is the unit of failure. Inserts run parent-first in depth-first
//! order without an enclosing transaction; when one fails, the rest of that document is
//! skipped, rows already written stay, and the next document is processed.

use crate::config::Level;
use crate::error::AppError;
use crate::model::{ImportNode, NewNode};
use crate::service::NodeWriter;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use uuid::Uuid;

/// Per-level created counts across the batch plus one message per failed document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportReport {
    created: [u64; 7],
    pub errors: Vec<String>,
}

impl ImportReport {
    pub fn created(&self, level: Level) -> u64 {
        self.created[level.index()]
    }

    fn record_created(&mut self, level: Level) {
        self.created[level.index()] += 1;
    }

    pub fn total_created(&self) -> u64 {
        self.created.iter().sum()
    }
}

impl Serialize for ImportReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Level::ALL.len() + 1))?;
        for level in Level::ALL {
            map.serialize_entry(level.descriptor().created_key, &self.created(level))?;
        }
        map.serialize_entry("errors", &self.errors)?;
        map.end()
    }
}

/// Extract the document list from an upload body. Anything but an array under
/// `curriculums` is rejected before any insert.
pub fn parse_documents(body: Value) -> Result<Vec<Value>, AppError> {
    match body {
        Value::Object(mut map) => match map.remove("curriculums") {
            Some(Value::Array(documents)) => Ok(documents),
            _ => Err(AppError::BadRequest("curriculums must be an array".into())),
        },
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub struct BulkImporter;

impl BulkImporter {
    /// Import every document in order. Never fails as a whole; failures land in the report.
    pub async fn run<W: NodeWriter>(writer: &mut W, documents: Vec<Value>) -> ImportReport {
        let mut report = ImportReport::default();
        for document in &documents {
            if let Err(e) = Self::import_document(writer, document, &mut report).await {
                let label = document
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("<unnamed>");
                tracing::warn!(curriculum = %label, error = %e, "curriculum import failed");
                report
                    .errors
                    .push(format!("Error processing curriculum '{}': {}", label, e));
            }
        }
        tracing::info!(
            created = report.total_created(),
            failed = report.errors.len(),
            "bulk import finished"
        );
        report
    }

    /// Depth-first, parent-before-child inserts for one document. Each node is decoded when
    /// reached, so the first bad node or failed insert stops the document with earlier rows kept.
    async fn import_document<W: NodeWriter>(
        writer: &mut W,
        document: &Value,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let mut pending: Vec<(Level, &Value, Option<Uuid>)> =
            vec![(Level::Curriculum, document, None)];
        while let Some((level, value, parent_id)) = pending.pop() {
            let node = ImportNode::new(value)?;
            let attributes = node.attributes(level)?;
            let row = NewNode::new(level, parent_id, attributes.fields(level)?);
            writer.insert_node(&row).await?;
            report.record_created(level);
            if let Some(child_level) = level.child() {
                // Reversed so siblings pop in document order.
                for child in node.children(level)?.iter().rev() {
                    pending.push((child_level, child, Some(row.id)));
                }
            }
        }
        Ok(())
    }
}
