//! Level descriptor table: the fixed seven-level hierarchy, flattened for runtime use.
//! SQL statements, routes, and bulk import are all driven from these descriptors.

/// One of the seven entity kinds, root first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Curriculum,
    Grade,
    Book,
    Unit,
    Lesson,
    Stage,
    Activity,
}

/// Static metadata for one level.
#[derive(Debug)]
pub struct LevelDescriptor {
    pub table: &'static str,
    /// URL segment under the API prefix (e.g. "grades").
    pub path_segment: &'static str,
    /// Display name used in confirmation messages.
    pub display: &'static str,
    /// FK column referencing the parent table. None only for the root.
    pub parent_column: Option<&'static str>,
    /// JSON field carrying the parent id on create.
    pub parent_field: Option<&'static str>,
    pub duration_column: &'static str,
    pub duration_field: &'static str,
    /// Activities carry a free-text `type` tag.
    pub has_type: bool,
    /// Whether bulk import persists objectives and duration, or the name only.
    pub imports_metadata: bool,
    /// Key of the per-level counter in the bulk import result.
    pub created_key: &'static str,
}

const CURRICULUM: LevelDescriptor = LevelDescriptor {
    table: "curriculums",
    path_segment: "curriculums",
    display: "Curriculum",
    parent_column: None,
    parent_field: None,
    duration_column: "duration",
    duration_field: "duration",
    has_type: false,
    imports_metadata: false,
    created_key: "curriculumsCreated",
};

const GRADE: LevelDescriptor = LevelDescriptor {
    table: "grades",
    path_segment: "grades",
    display: "Grade",
    parent_column: Some("curriculum_id"),
    parent_field: Some("curriculumId"),
    duration_column: "duration",
    duration_field: "duration",
    has_type: false,
    imports_metadata: false,
    created_key: "gradesCreated",
};

const BOOK: LevelDescriptor = LevelDescriptor {
    table: "books",
    path_segment: "books",
    display: "Book",
    parent_column: Some("grade_id"),
    parent_field: Some("gradeId"),
    duration_column: "duration",
    duration_field: "duration",
    has_type: false,
    // Books import like curriculums and grades: name only. Full metadata starts at units.
    imports_metadata: false,
    created_key: "booksCreated",
};

const UNIT: LevelDescriptor = LevelDescriptor {
    table: "units",
    path_segment: "units",
    display: "Unit",
    parent_column: Some("book_id"),
    parent_field: Some("bookId"),
    duration_column: "duration",
    duration_field: "duration",
    has_type: false,
    imports_metadata: true,
    created_key: "unitsCreated",
};

const LESSON: LevelDescriptor = LevelDescriptor {
    table: "lessons",
    path_segment: "lessons",
    display: "Lesson",
    parent_column: Some("unit_id"),
    parent_field: Some("unitId"),
    duration_column: "total_time",
    duration_field: "totalTime",
    has_type: false,
    imports_metadata: true,
    created_key: "lessonsCreated",
};

const STAGE: LevelDescriptor = LevelDescriptor {
    table: "stages",
    path_segment: "stages",
    display: "Stage",
    parent_column: Some("lesson_id"),
    parent_field: Some("lessonId"),
    duration_column: "total_time",
    duration_field: "totalTime",
    has_type: false,
    imports_metadata: true,
    created_key: "stagesCreated",
};

const ACTIVITY: LevelDescriptor = LevelDescriptor {
    table: "activities",
    path_segment: "activities",
    display: "Activity",
    parent_column: Some("stage_id"),
    parent_field: Some("stageId"),
    duration_column: "total_time",
    duration_field: "totalTime",
    has_type: true,
    imports_metadata: true,
    created_key: "activitiesCreated",
};

impl Level {
    /// Parent-first order; table creation and import traversal rely on it.
    pub const ALL: [Level; 7] = [
        Level::Curriculum,
        Level::Grade,
        Level::Book,
        Level::Unit,
        Level::Lesson,
        Level::Stage,
        Level::Activity,
    ];

    pub fn descriptor(self) -> &'static LevelDescriptor {
        match self {
            Level::Curriculum => &CURRICULUM,
            Level::Grade => &GRADE,
            Level::Book => &BOOK,
            Level::Unit => &UNIT,
            Level::Lesson => &LESSON,
            Level::Stage => &STAGE,
            Level::Activity => &ACTIVITY,
        }
    }

    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Curriculum => None,
            Level::Grade => Some(Level::Curriculum),
            Level::Book => Some(Level::Grade),
            Level::Unit => Some(Level::Book),
            Level::Lesson => Some(Level::Unit),
            Level::Stage => Some(Level::Lesson),
            Level::Activity => Some(Level::Stage),
        }
    }

    pub fn child(self) -> Option<Level> {
        match self {
            Level::Curriculum => Some(Level::Grade),
            Level::Grade => Some(Level::Book),
            Level::Book => Some(Level::Unit),
            Level::Unit => Some(Level::Lesson),
            Level::Lesson => Some(Level::Stage),
            Level::Stage => Some(Level::Activity),
            Level::Activity => None,
        }
    }

    /// Position in `ALL`; used to index per-level counters.
    pub fn index(self) -> usize {
        self as usize
    }
}
