// idcheck-core/src/infrastructure/adapters/mod.rs

pub mod command;
pub mod llm_response;
pub mod sidecar;

use std::path::Path;
use std::sync::Arc;

use crate::domain::project::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{EntityExtractor, TextExtractor};

pub use command::{CommandEntityExtractor, CommandTextExtractor};
pub use llm_response::parse_llm_response;
pub use sidecar::SidecarTextExtractor;

/// The extractor pair a pipeline run needs.
#[derive(Clone)]
pub struct Extractors {
    pub text: Arc<dyn TextExtractor>,
    pub entities: Arc<dyn EntityExtractor>,
}

impl Extractors {
    /// Wires adapters from `extraction` settings. OCR falls back to sidecar
    /// transcripts; an entity extractor is mandatory.
    pub fn from_config(
        config: &ProjectConfig,
        project_dir: &Path,
    ) -> Result<Self, InfrastructureError> {
        let text: Arc<dyn TextExtractor> = match &config.extraction.ocr_command {
            Some(spec) => Arc::new(CommandTextExtractor::new(spec.clone(), project_dir)),
            None => Arc::new(SidecarTextExtractor),
        };

        let entities: Arc<dyn EntityExtractor> = match &config.extraction.llm_command {
            Some(spec) => Arc::new(CommandEntityExtractor::new(spec.clone(), project_dir)),
            None => {
                return Err(InfrastructureError::ConfigError(
                    "extraction.llm-command is required to extract fields".to_string(),
                ));
            }
        };

        Ok(Self { text, entities })
    }
}
