// idcheck-core/src/ports/mod.rs

pub mod extractor;

pub use extractor::{EntityExtractor, TextExtractor};
