// idcheck-core/src/domain/project/mod.rs

pub mod configuration;
pub mod submission;

pub use configuration::{CommandSpec, ExtractionConfig, ProjectConfig};
pub use submission::{DocumentImage, Submission};
