// src/domain/project/configuration.rs

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

/// An external program standing in for the OCR or entity-extraction service.
#[derive(Debug, Deserialize, Serialize, Clone, Validate, PartialEq)]
pub struct CommandSpec {
    #[validate(length(min = 1, message = "Command program cannot be empty"))]
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, Validate, PartialEq)]
pub struct ExtractionConfig {
    /// Invoked as `program args.. <image>`. Without it, `<image>.txt` transcripts are read.
    #[validate(nested)]
    #[serde(rename = "ocr-command", default)]
    pub ocr_command: Option<CommandSpec>,

    /// Receives the prompt on stdin and answers with a JSON object on stdout.
    #[validate(nested)]
    #[serde(rename = "llm-command", default)]
    pub llm_command: Option<CommandSpec>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[validate(length(min = 1, message = "Project name cannot be empty"))]
    pub name: String,

    #[serde(rename = "dataset-path", default = "default_dataset_path")]
    pub dataset_path: String,

    #[serde(rename = "output-path", default = "default_output_path")]
    pub output_path: String,

    /// Expected document types, in slot order (`document_1`, `document_2`, ...).
    #[validate(length(min = 1, message = "At least one document type is required"))]
    #[serde(default = "default_documents")]
    pub documents: Vec<String>,

    #[validate(length(min = 1, message = "At least one image extension is required"))]
    #[serde(rename = "image-extensions", default = "default_image_extensions")]
    pub image_extensions: Vec<String>,

    /// Persons processed in parallel during a batch run.
    #[validate(range(min = 1, max = 64))]
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[validate(nested)]
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dataset_path: default_dataset_path(),
            output_path: default_output_path(),
            documents: default_documents(),
            image_extensions: default_image_extensions(),
            concurrency: default_concurrency(),
            extraction: ExtractionConfig::default(),
        }
    }

    /// Runs the declarative checks and flattens them into a domain error.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidConfig(e.to_string()))
    }

    /// Dataset root; absolute `dataset-path` values are used as they are.
    pub fn dataset_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.dataset_path)
    }

    pub fn output_file(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.output_path)
    }

    /// Case-insensitive match of a file extension against `image-extensions`.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.image_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }
}

fn default_dataset_path() -> String {
    "dataset".to_string()
}
fn default_output_path() -> String {
    "output_all_persons.json".to_string()
}
fn default_documents() -> Vec<String> {
    vec![
        "government_id".to_string(),
        "bank_statement".to_string(),
        "employment_letter".to_string(),
    ]
}
fn default_image_extensions() -> Vec<String> {
    vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()]
}
fn default_concurrency() -> usize {
    4
}
