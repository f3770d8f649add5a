//! Builds parameterized DDL, INSERT, SELECT, UPDATE, DELETE from level descriptors.
//! Identifiers come from the static descriptor table only; values are always parameters.

use crate::config::Level;
use crate::model::{NewNode, NodeFields};
use crate::sql::BindValue;
use uuid::Uuid;

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }

    fn push_uuid(&mut self, id: Uuid) -> String {
        format!("${}::uuid", self.push_param(BindValue::Uuid(id)))
    }

    fn push_text(&mut self, v: impl Into<BindValue>) -> String {
        format!("${}", self.push_param(v.into()))
    }
}

/// CREATE TABLE for one level. Parent tables must be created first.
pub fn create_table(level: Level) -> String {
    let d = level.descriptor();
    let mut cols = vec![format!("{} UUID PRIMARY KEY", quoted("id"))];
    if let (Some(parent_col), Some(parent)) = (d.parent_column, level.parent()) {
        cols.push(format!(
            "{} UUID NOT NULL REFERENCES {}({}) ON DELETE CASCADE",
            quoted(parent_col),
            quoted(parent.descriptor().table),
            quoted("id")
        ));
    }
    cols.push(format!("{} TEXT NOT NULL", quoted("name")));
    cols.push(format!("{} TEXT DEFAULT '[]'", quoted("learning_objectives")));
    cols.push(format!("{} TEXT DEFAULT ''", quoted(d.duration_column)));
    if d.has_type {
        cols.push(format!("{} TEXT", quoted("type")));
    }
    cols.push(format!("{} TIMESTAMPTZ NOT NULL DEFAULT NOW()", quoted("created_at")));
    cols.push(format!("{} TIMESTAMPTZ NOT NULL DEFAULT NOW()", quoted("updated_at")));
    cols.push(format!("{} BIGINT GENERATED BY DEFAULT AS IDENTITY", quoted("seq")));
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quoted(d.table),
        cols.join(", ")
    )
}

/// Index on the parent FK column; None for the root level.
pub fn create_parent_index(level: Level) -> Option<String> {
    let d = level.descriptor();
    let parent_col = d.parent_column?;
    Some(format!(
        "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
        quoted(&format!("idx_{}_{}", d.table, parent_col)),
        quoted(d.table),
        quoted(parent_col)
    ))
}

/// SELECT every row of a level in creation order, aliased to `NodeRecord` column names.
pub fn select_level(level: Level) -> String {
    let d = level.descriptor();
    let parent = d
        .parent_column
        .map(quoted)
        .unwrap_or_else(|| "NULL::uuid".to_string());
    let activity_type = if d.has_type {
        quoted("type")
    } else {
        "NULL::text".to_string()
    };
    format!(
        "SELECT {id}, {parent} AS parent_id, {name}, {objectives}, {duration} AS duration, {activity_type} AS activity_type FROM {table} ORDER BY {created}, {seq}",
        id = quoted("id"),
        parent = parent,
        name = quoted("name"),
        objectives = quoted("learning_objectives"),
        duration = quoted(d.duration_column),
        activity_type = activity_type,
        table = quoted(d.table),
        created = quoted("created_at"),
        seq = quoted("seq"),
    )
}

/// INSERT one row. Fields left as `None` are omitted so the column default applies.
pub fn insert(node: &NewNode<'_>) -> QueryBuf {
    let d = node.level.descriptor();
    let mut q = QueryBuf::new();
    let mut cols = vec![quoted("id")];
    let mut placeholders = vec![q.push_uuid(node.id)];
    if let (Some(parent_col), Some(parent_id)) = (d.parent_column, node.parent_id) {
        cols.push(quoted(parent_col));
        placeholders.push(q.push_uuid(parent_id));
    }
    cols.push(quoted("name"));
    placeholders.push(q.push_text(Some(node.fields.name)));
    if let Some(text) = node.objectives_text() {
        cols.push(quoted("learning_objectives"));
        placeholders.push(q.push_text(Some(text)));
    }
    if let Some(duration) = node.fields.duration {
        cols.push(quoted(d.duration_column));
        placeholders.push(q.push_text(Some(duration)));
    }
    if d.has_type {
        if let Some(t) = node.fields.activity_type {
            cols.push(quoted("type"));
            placeholders.push(q.push_text(Some(t)));
        }
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(d.table),
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}

/// Full-replace UPDATE by id: every mutable column is written, omitted fields become NULL.
pub fn update(level: Level, id: Uuid, fields: &NodeFields<'_>) -> QueryBuf {
    let d = level.descriptor();
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    let name = q.push_text(Some(fields.name));
    sets.push(format!("{} = {}", quoted("name"), name));
    let objectives = q.push_text(fields.learning_objectives.map(crate::model::encode_objectives));
    sets.push(format!("{} = {}", quoted("learning_objectives"), objectives));
    let duration = q.push_text(fields.duration);
    sets.push(format!("{} = {}", quoted(d.duration_column), duration));
    if d.has_type {
        let t = q.push_text(fields.activity_type);
        sets.push(format!("{} = {}", quoted("type"), t));
    }
    sets.push(format!("{} = NOW()", quoted("updated_at")));
    let id_ph = q.push_uuid(id);
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        quoted(d.table),
        sets.join(", "),
        quoted("id"),
        id_ph
    );
    q
}

/// DELETE by id.
pub fn delete(level: Level, id: Uuid) -> QueryBuf {
    let d = level.descriptor();
    let mut q = QueryBuf::new();
    let id_ph = q.push_uuid(id);
    q.sql = format!("DELETE FROM {} WHERE {} = {}", quoted(d.table), quoted("id"), id_ph);
    q
}
