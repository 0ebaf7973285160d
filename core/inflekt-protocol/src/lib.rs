pub mod code;
pub mod model;
pub mod tag;

// Re-export core types for convenience
pub use code::TagCode;
pub use model::*;
pub use tag::{Prime, Tag};
