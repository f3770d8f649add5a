//! Tree assembly: seven flat record sets composed into nested curriculum documents.

use crate::config::Level;
use crate::error::AppError;
use crate::model::{
    decode_objectives, ActivityNode, BookNode, CurriculumNode, GradeNode, LessonNode, NodeRecord,
    StageNode, UnitNode,
};
use crate::sql::select_level;
use sqlx::{PgConnection, PgPool};
use std::collections::HashMap;
use uuid::Uuid;

/// Rows of every level, each set in creation order.
#[derive(Clone, Debug, Default)]
pub struct LevelRecords {
    rows: [Vec<NodeRecord>; 7],
}

impl LevelRecords {
    pub fn rows(&self, level: Level) -> &[NodeRecord] {
        &self.rows[level.index()]
    }

    pub fn set(&mut self, level: Level, rows: Vec<NodeRecord>) {
        self.rows[level.index()] = rows;
    }

    /// Read all seven tables on one connection.
    pub async fn fetch(conn: &mut PgConnection) -> Result<Self, AppError> {
        let mut records = LevelRecords::default();
        for level in Level::ALL {
            let sql = select_level(level);
            tracing::debug!(sql = %sql, "query");
            let rows = sqlx::query_as::<_, NodeRecord>(&sql)
                .fetch_all(&mut *conn)
                .await?;
            records.set(level, rows);
        }
        Ok(records)
    }
}

/// Children grouped by parent id, relative order preserved.
type ChildIndex<'a> = HashMap<Uuid, Vec<&'a NodeRecord>>;

fn index_by_parent(rows: &[NodeRecord]) -> ChildIndex<'_> {
    let mut index: ChildIndex<'_> = HashMap::new();
    for row in rows {
        if let Some(parent) = row.parent_id {
            index.entry(parent).or_default().push(row);
        }
    }
    index
}

/// Builds the nested tree from flat records. Rows whose parent is absent never appear.
pub struct TreeAssembler<'a> {
    records: &'a LevelRecords,
    children: [ChildIndex<'a>; 7],
}

impl<'a> TreeAssembler<'a> {
    pub fn new(records: &'a LevelRecords) -> Self {
        let children = Level::ALL.map(|level| index_by_parent(records.rows(level)));
        Self { records, children }
    }

    pub fn assemble(&self) -> Vec<CurriculumNode> {
        self.records
            .rows(Level::Curriculum)
            .iter()
            .map(|r| self.curriculum(r))
            .collect()
    }

    fn children(&self, level: Level, parent: Uuid) -> impl Iterator<Item = &'a NodeRecord> + '_ {
        self.children[level.index()]
            .get(&parent)
            .into_iter()
            .flatten()
            .copied()
    }

    fn curriculum(&self, r: &NodeRecord) -> CurriculumNode {
        CurriculumNode {
            id: r.id,
            name: r.name.clone(),
            learning_objectives: objectives(r),
            duration: duration(r),
            standards: Vec::new(),
            grades: self.children(Level::Grade, r.id).map(|g| self.grade(g)).collect(),
        }
    }

    fn grade(&self, r: &NodeRecord) -> GradeNode {
        GradeNode {
            id: r.id,
            name: r.name.clone(),
            learning_objectives: objectives(r),
            duration: duration(r),
            books: self.children(Level::Book, r.id).map(|b| self.book(b)).collect(),
        }
    }

    fn book(&self, r: &NodeRecord) -> BookNode {
        BookNode {
            id: r.id,
            name: r.name.clone(),
            learning_objectives: objectives(r),
            duration: duration(r),
            units: self.children(Level::Unit, r.id).map(|u| self.unit(u)).collect(),
        }
    }

    fn unit(&self, r: &NodeRecord) -> UnitNode {
        UnitNode {
            id: r.id,
            name: r.name.clone(),
            learning_objectives: objectives(r),
            duration: duration(r),
            lessons: self.children(Level::Lesson, r.id).map(|l| self.lesson(l)).collect(),
        }
    }

    fn lesson(&self, r: &NodeRecord) -> LessonNode {
        LessonNode {
            id: r.id,
            name: r.name.clone(),
            learning_objectives: objectives(r),
            total_time: duration(r),
            standard_codes: Vec::new(),
            stages: self.children(Level::Stage, r.id).map(|s| self.stage(s)).collect(),
        }
    }

    fn stage(&self, r: &NodeRecord) -> StageNode {
        StageNode {
            id: r.id,
            name: r.name.clone(),
            learning_objectives: objectives(r),
            total_time: duration(r),
            activities: self
                .children(Level::Activity, r.id)
                .map(activity)
                .collect(),
        }
    }
}

fn activity(r: &NodeRecord) -> ActivityNode {
    ActivityNode {
        id: r.id,
        name: r.name.clone(),
        learning_objectives: objectives(r),
        total_time: duration(r),
        activity_type: r.activity_type.clone(),
        standard_codes: Vec::new(),
    }
}

fn objectives(r: &NodeRecord) -> Vec<String> {
    decode_objectives(r.learning_objectives.as_deref())
}

fn duration(r: &NodeRecord) -> String {
    r.duration.clone().unwrap_or_default()
}

/// Read and assemble the whole hierarchy. Any read error fails the whole call.
pub async fn load_tree(pool: &PgPool) -> Result<Vec<CurriculumNode>, AppError> {
    let mut conn = pool.acquire().await?;
    let records = LevelRecords::fetch(&mut *conn).await?;
    Ok(TreeAssembler::new(&records).assemble())
}
