pub mod levels;
pub mod settings;

pub use levels::*;
pub use settings::*;
