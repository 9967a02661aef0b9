// idcheck-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(idcheck::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(idcheck::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(idcheck::infra::config))]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(idcheck::infra::config_missing))]
    ConfigNotFound(String),

    // --- JSON ---
    #[error("JSON Error: {0}")]
    #[diagnostic(code(idcheck::infra::json))]
    JsonError(#[from] serde_json::Error),

    // --- DATASET ---
    #[error("Dataset directory not found: '{0}'")]
    #[diagnostic(
        code(idcheck::infra::dataset_missing),
        help("Expected <dataset>/<person_id>/<person_id>_<document_type>.<ext>.")
    )]
    DatasetNotFound(String),

    // --- EXTERNAL SERVICES ---
    #[error("External command '{program}' failed: {reason}")]
    #[diagnostic(code(idcheck::infra::command))]
    CommandFailed { program: String, reason: String },

    #[error("Unusable extractor response: {0}")]
    #[diagnostic(
        code(idcheck::infra::extraction),
        help("The entity extractor must answer with a single JSON object.")
    )]
    ExtractionError(String),
}
