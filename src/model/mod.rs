//! Typed records: stored rows, API inputs, import documents, and assembled tree nodes.

pub mod import;
pub mod input;
pub mod objectives;
pub mod record;
pub mod tree;

pub use import::*;
pub use input::*;
pub use objectives::{decode_objectives, encode_objectives};
pub use record::*;
pub use tree::*;
