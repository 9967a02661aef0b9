pub mod error;
pub mod extraction;
pub mod normalization;
pub mod project;
pub mod record;
pub mod verification;

// Re-exports to keep imports short elsewhere
pub use error::DomainError;
pub use record::{AddressComponents, Field, FieldMapping, FieldValue, RecordSet};
