// idcheck-core/src/domain/project/submission.rs

use crate::domain::error::DomainError;
use crate::domain::record::document_slot;
use std::path::PathBuf;

/// One uploaded or discovered image together with its document type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentImage {
    pub doc_type: String,
    pub path: PathBuf,
}

/// The documents of one person, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub person_id: String,
    pub documents: Vec<DocumentImage>,
}

impl Submission {
    pub fn new(person_id: impl Into<String>, documents: Vec<DocumentImage>) -> Self {
        Self {
            person_id: person_id.into(),
            documents,
        }
    }

    /// Pairs `paths` positionally with `doc_types`. Counts must match.
    pub fn from_paths(
        person_id: impl Into<String>,
        doc_types: &[String],
        paths: Vec<PathBuf>,
    ) -> Result<Self, DomainError> {
        let person_id = person_id.into();
        if paths.len() != doc_types.len() {
            return Err(DomainError::InvalidSubmission {
                person_id,
                reason: format!(
                    "expected exactly {} documents, got {}",
                    doc_types.len(),
                    paths.len()
                ),
            });
        }

        let documents = doc_types
            .iter()
            .cloned()
            .zip(paths)
            .map(|(doc_type, path)| DocumentImage { doc_type, path })
            .collect();
        Ok(Self::new(person_id, documents))
    }

    /// `(slot, document)` pairs: `document_1` for the first image, and so on.
    pub fn slots(&self) -> impl Iterator<Item = (String, &DocumentImage)> {
        self.documents
            .iter()
            .enumerate()
            .map(|(i, doc)| (document_slot(i), doc))
    }
}
