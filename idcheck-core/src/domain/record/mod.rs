// idcheck-core/src/domain/record/mod.rs

pub mod field;
pub mod mapping;
pub mod value;

pub use field::Field;
pub use mapping::{FieldMapping, RecordSet, document_slot};
pub use value::{AddressComponents, FieldValue};
