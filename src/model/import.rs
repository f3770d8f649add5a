//! Bulk import documents: one nested curriculum subtree per entry.
//!
//! Nodes stay as raw JSON until the importer reaches them, so a badly typed field only
//! fails the node that carries it.

use crate::config::Level;
use crate::error::AppError;
use crate::model::NodeAttributes;
use serde_json::{Map, Value};

/// Attribute keys read from a node that imports full metadata.
const METADATA_KEYS: [&str; 5] = ["name", "learningObjectives", "duration", "totalTime", "type"];

/// One node of an import document, at any level, borrowed from the request body.
#[derive(Clone, Copy, Debug)]
pub struct ImportNode<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> ImportNode<'a> {
    pub fn new(value: &'a Value) -> Result<Self, AppError> {
        value
            .as_object()
            .map(|fields| Self { fields })
            .ok_or_else(|| AppError::BadRequest("node must be a JSON object".into()))
    }

    /// Attributes persisted for this node. Curriculum, grade and book rows carry the name
    /// only, and their other fields are never decoded.
    pub fn attributes(&self, level: Level) -> Result<NodeAttributes, AppError> {
        if !level.descriptor().imports_metadata {
            return Ok(NodeAttributes {
                name: self.name().map(String::from),
                ..NodeAttributes::default()
            });
        }
        let subset: Map<String, Value> = METADATA_KEYS
            .iter()
            .filter_map(|key| self.fields.get(*key).map(|v| (key.to_string(), v.clone())))
            .collect();
        serde_json::from_value(Value::Object(subset)).map_err(|e| {
            AppError::BadRequest(format!(
                "invalid {} '{}': {}",
                level.descriptor().display,
                self.name().unwrap_or("<unnamed>"),
                e
            ))
        })
    }

    pub fn name(&self) -> Option<&'a str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Raw children of this node when it sits at `level`. Sequences keyed for other levels
    /// are ignored; absent and null mean none.
    pub fn children(&self, level: Level) -> Result<&'a [Value], AppError> {
        let Some(child) = level.child() else {
            return Ok(&[]);
        };
        let key = child.descriptor().path_segment;
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(AppError::BadRequest(format!("{} must be an array", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_null_children_are_empty() {
        let value = json!({ "name": "C", "grades": null });
        let node = ImportNode::new(&value).unwrap();
        assert!(node.children(Level::Curriculum).unwrap().is_empty());
        assert!(node.children(Level::Grade).unwrap().is_empty());
    }

    #[test]
    fn children_follow_the_level() {
        let value = json!({
            "name": "Stage 1",
            "activities": [{ "name": "A1" }, { "name": "A2" }],
            "grades": [{ "name": "misplaced" }]
        });
        let node = ImportNode::new(&value).unwrap();
        let names: Vec<_> = node
            .children(Level::Stage)
            .unwrap()
            .iter()
            .map(|v| v["name"].as_str().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["A1", "A2"]);
        assert!(node.children(Level::Activity).unwrap().is_empty());
    }

    #[test]
    fn non_array_children_are_rejected() {
        let value = json!({ "name": "B", "units": { "name": "U" } });
        let node = ImportNode::new(&value).unwrap();
        assert!(matches!(node.children(Level::Book), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn shallow_levels_drop_metadata() {
        let value = json!({
            "name": "Book",
            "learningObjectives": ["read"],
            "duration": "1 term"
        });
        let node = ImportNode::new(&value).unwrap();
        let attributes = node.attributes(Level::Book).unwrap();
        let fields = attributes.fields(Level::Book).unwrap();
        assert_eq!(fields.learning_objectives, None);
        assert_eq!(fields.duration, None);

        let attributes = node.attributes(Level::Unit).unwrap();
        let fields = attributes.fields(Level::Unit).unwrap();
        assert_eq!(fields.learning_objectives, Some(&["read".to_string()][..]));
        assert_eq!(fields.duration, Some("1 term"));
    }

    #[test]
    fn shallow_levels_ignore_mistyped_metadata() {
        let value = json!({ "name": "Grade 1", "duration": 3, "learningObjectives": "all" });
        let node = ImportNode::new(&value).unwrap();
        let attributes = node.attributes(Level::Grade).unwrap();
        assert_eq!(attributes.name.as_deref(), Some("Grade 1"));
        assert!(attributes.duration.is_none());
    }

    #[test]
    fn deep_levels_reject_mistyped_metadata() {
        let value = json!({ "name": "Unit 1", "learningObjectives": "bad" });
        let node = ImportNode::new(&value).unwrap();
        match node.attributes(Level::Unit) {
            Err(AppError::BadRequest(m)) => assert!(m.starts_with("invalid Unit 'Unit 1'")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn non_object_node_is_rejected() {
        assert!(ImportNode::new(&json!("just a string")).is_err());
    }
}
