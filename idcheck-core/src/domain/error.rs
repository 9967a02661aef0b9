// idcheck-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid record set: {0}")]
    #[diagnostic(
        code(idcheck::domain::record_set),
        help("Expected a JSON object mapping document slots to field objects, e.g. {{\"document_1\": {{\"Full Name\": \"...\"}}}}.")
    )]
    RecordSetError(String),

    #[error("Invalid project configuration: {0}")]
    #[diagnostic(code(idcheck::domain::config))]
    InvalidConfig(String),

    #[error("Invalid submission for '{person_id}': {reason}")]
    #[diagnostic(
        code(idcheck::domain::submission),
        help("Submit exactly one image per expected document type.")
    )]
    InvalidSubmission { person_id: String, reason: String },
}
