// idcheck-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdcheckError {
    // --- DOMAIN ERRORS (record sets, configuration rules) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing, external commands) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl From<std::io::Error> for IdcheckError {
    fn from(err: std::io::Error) -> Self {
        IdcheckError::Infrastructure(InfrastructureError::Io(err))
    }
}
