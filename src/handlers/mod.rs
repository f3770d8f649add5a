//! HTTP handlers: health, per-level CRUD, curriculum tree, bulk upload.

pub mod curriculum;
pub mod health;
pub mod node;
pub use curriculum::*;
pub use health::*;
pub use node::*;
