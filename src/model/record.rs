//! Stored rows as read back for tree assembly, and rows about to be inserted.

use crate::config::Level;
use crate::model::{encode_objectives, NodeFields};
use serde_json::{Map, Value};
use uuid::Uuid;

/// One row of any level. Columns are aliased to these names by the level SELECT.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct NodeRecord {
    pub id: Uuid,
    /// None for curriculums.
    pub parent_id: Option<Uuid>,
    pub name: String,
    /// Serialized objective list as stored.
    pub learning_objectives: Option<String>,
    pub duration: Option<String>,
    pub activity_type: Option<String>,
}

/// A row to insert. The id is generated before the insert and the parent id is already known.
#[derive(Clone, Copy, Debug)]
pub struct NewNode<'a> {
    pub level: Level,
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub fields: NodeFields<'a>,
}

impl<'a> NewNode<'a> {
    pub fn new(level: Level, parent_id: Option<Uuid>, fields: NodeFields<'a>) -> Self {
        Self {
            level,
            id: Uuid::new_v4(),
            parent_id,
            fields,
        }
    }

    pub fn objectives_text(&self) -> Option<String> {
        self.fields.learning_objectives.map(encode_objectives)
    }

    /// The created representation echoed by `POST /<level>`; unsupplied fields show their defaults.
    pub fn to_json(&self) -> Value {
        let d = self.level.descriptor();
        let mut map = Map::new();
        map.insert("id".into(), Value::String(self.id.to_string()));
        map.insert("name".into(), Value::String(self.fields.name.to_string()));
        map.insert(
            "learningObjectives".into(),
            serde_json::json!(self.fields.learning_objectives.unwrap_or(&[])),
        );
        map.insert(
            d.duration_field.into(),
            Value::String(self.fields.duration.unwrap_or("").to_string()),
        );
        if d.has_type {
            map.insert(
                "type".into(),
                self.fields
                    .activity_type
                    .map(|t| Value::String(t.to_string()))
                    .unwrap_or(Value::Null),
            );
        }
        if let (Some(field), Some(parent)) = (d.parent_field, self.parent_id) {
            map.insert(field.into(), Value::String(parent.to_string()));
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_grade_echo_has_defaults_and_parent() {
        let parent = Uuid::new_v4();
        let node = NewNode::new(
            Level::Grade,
            Some(parent),
            NodeFields {
                name: "G1",
                learning_objectives: None,
                duration: None,
                activity_type: None,
            },
        );
        let json = node.to_json();
        assert_eq!(json["name"], "G1");
        assert_eq!(json["learningObjectives"], serde_json::json!([]));
        assert_eq!(json["duration"], "");
        assert_eq!(json["curriculumId"], parent.to_string());
        assert!(json.get("type").is_none());
    }

    #[test]
    fn created_activity_echo_uses_total_time_and_type() {
        let objectives = vec!["count to ten".to_string()];
        let node = NewNode::new(
            Level::Activity,
            Some(Uuid::new_v4()),
            NodeFields {
                name: "Counting game",
                learning_objectives: Some(objectives.as_slice()),
                duration: Some("10m"),
                activity_type: Some("game"),
            },
        );
        let json = node.to_json();
        assert_eq!(json["totalTime"], "10m");
        assert_eq!(json["type"], "game");
        assert_eq!(json["learningObjectives"], serde_json::json!(["count to ten"]));
        assert_eq!(node.objectives_text().as_deref(), Some("[\"count to ten\"]"));
    }

    #[test]
    fn generated_ids_are_distinct() {
        let fields = NodeFields {
            name: "C",
            learning_objectives: None,
            duration: None,
            activity_type: None,
        };
        let a = NewNode::new(Level::Curriculum, None, fields);
        let b = NewNode::new(Level::Curriculum, None, fields);
        assert_ne!(a.id, b.id);
    }
}
