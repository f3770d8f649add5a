//! Services: generic per-level CRUD, tree assembly, and bulk import.

mod crud;
mod import;
mod tree;
mod writer;
pub use crud::CrudService;
pub use import::{parse_documents, BulkImporter, ImportReport};
pub use tree::{load_tree, LevelRecords, TreeAssembler};
pub use writer::{execute, NodeWriter};
