//! Request bodies for single-row create and update.

use crate::config::Level;
use crate::error::AppError;
use serde::Deserialize;
use uuid::Uuid;

/// Mutable attributes shared by every level. The duration-like value arrives as `duration`
/// or `totalTime` depending on the level; `type` is only meaningful for activities.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAttributes {
    pub name: Option<String>,
    pub learning_objectives: Option<Vec<String>>,
    pub duration: Option<String>,
    pub total_time: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
}

/// Column values for one row, borrowed from a request or import document.
/// `None` means "not supplied": insert leaves the column default, update writes NULL.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeFields<'a> {
    pub name: &'a str,
    pub learning_objectives: Option<&'a [String]>,
    pub duration: Option<&'a str>,
    pub activity_type: Option<&'a str>,
}

impl NodeAttributes {
    pub fn name(&self) -> Result<&str, AppError> {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::Validation("name is required".into()))
    }

    fn duration_for(&self, level: Level) -> Option<&str> {
        match level.descriptor().duration_field {
            "totalTime" => self.total_time.as_deref(),
            _ => self.duration.as_deref(),
        }
    }

    /// Every field the level stores.
    pub fn fields(&self, level: Level) -> Result<NodeFields<'_>, AppError> {
        Ok(NodeFields {
            name: self.name()?,
            learning_objectives: self.learning_objectives.as_deref(),
            duration: self.duration_for(level),
            activity_type: if level.descriptor().has_type {
                self.activity_type.as_deref()
            } else {
                None
            },
        })
    }
}

/// Body of `POST /<level>` and `PUT /<level>/:id`. Parent ids are read on create only.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInput {
    #[serde(flatten)]
    pub attributes: NodeAttributes,
    pub curriculum_id: Option<Uuid>,
    pub grade_id: Option<Uuid>,
    pub book_id: Option<Uuid>,
    pub unit_id: Option<Uuid>,
    pub lesson_id: Option<Uuid>,
    pub stage_id: Option<Uuid>,
}

impl NodeInput {
    /// The parent id for a row of `level`; an error when a non-root level omits it.
    pub fn parent_id(&self, level: Level) -> Result<Option<Uuid>, AppError> {
        let value = match level {
            Level::Curriculum => return Ok(None),
            Level::Grade => self.curriculum_id,
            Level::Book => self.grade_id,
            Level::Unit => self.book_id,
            Level::Lesson => self.unit_id,
            Level::Stage => self.lesson_id,
            Level::Activity => self.stage_id,
        };
        match value {
            Some(id) => Ok(Some(id)),
            None => Err(AppError::Validation(format!(
                "{} is required",
                level.descriptor().parent_field.unwrap_or("parent id")
            ))),
        }
    }
}
