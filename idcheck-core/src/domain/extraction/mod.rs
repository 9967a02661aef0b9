// idcheck-core/src/domain/extraction/mod.rs

pub mod preprocess;
pub mod prompt;

pub use preprocess::preprocess_text;
pub use prompt::{build_prompt, requested_fields};
