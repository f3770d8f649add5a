//! Assembled curriculum tree as returned by `GET /curriculums`.
//! Child sequences are always present, possibly empty.

use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumNode {
    pub id: Uuid,
    pub name: String,
    pub learning_objectives: Vec<String>,
    pub duration: String,
    /// Reserved; never populated.
    pub standards: Vec<String>,
    pub grades: Vec<GradeNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeNode {
    pub id: Uuid,
    pub name: String,
    pub learning_objectives: Vec<String>,
    pub duration: String,
    pub books: Vec<BookNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookNode {
    pub id: Uuid,
    pub name: String,
    pub learning_objectives: Vec<String>,
    pub duration: String,
    pub units: Vec<UnitNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitNode {
    pub id: Uuid,
    pub name: String,
    pub learning_objectives: Vec<String>,
    pub duration: String,
    pub lessons: Vec<LessonNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonNode {
    pub id: Uuid,
    pub name: String,
    pub learning_objectives: Vec<String>,
    pub total_time: String,
    /// Reserved; never populated.
    pub standard_codes: Vec<String>,
    pub stages: Vec<StageNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageNode {
    pub id: Uuid,
    pub name: String,
    pub learning_objectives: Vec<String>,
    pub total_time: String,
    pub activities: Vec<ActivityNode>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityNode {
    pub id: Uuid,
    pub name: String,
    pub learning_objectives: Vec<String>,
    pub total_time: String,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// Reserved; never populated.
    pub standard_codes: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CurriculumTree {
    pub curriculums: Vec<CurriculumNode>,
}
