//! SQL builder: identifiers from the level descriptor table only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
