// idcheck-core/src/ports/extractor.rs

// Contracts for the two external services the pipeline depends on. The
// pipeline only sees these traits, so any OCR engine or language model (or a
// test double) can be plugged in.

use crate::domain::record::FieldMapping;
use async_trait::async_trait;
use std::path::Path;

/// Image -> raw text (OCR or vision model).
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// `None` when the image cannot be read or the service fails.
    async fn extract_text(&self, image: &Path) -> Option<String>;
}

/// Pre-processed text -> field mapping (language model).
#[async_trait]
pub trait EntityExtractor: Send + Sync {
    /// An empty mapping when nothing was found or the service fails.
    async fn extract_entities(&self, text: &str, doc_type: &str) -> FieldMapping;
}
