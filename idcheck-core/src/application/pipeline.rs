// idcheck-core/src/application/pipeline.rs

use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::extraction::preprocess_text;
use crate::domain::normalization::normalize;
use crate::domain::project::{ProjectConfig, Submission};
use crate::domain::record::RecordSet;
use crate::domain::verification::{OverallStatus, VerificationReport, verify};
use crate::error::IdcheckError;
use crate::infrastructure::adapters::Extractors;
use crate::ports::{EntityExtractor, TextExtractor};

/// Everything produced for one person: normalized fields, per-rule results
/// and the verdict.
#[derive(Debug, Clone, Serialize)]
pub struct PersonReport {
    pub person_id: String,
    pub extracted_data: RecordSet,
    pub verification_results: VerificationReport,
    pub overall_status: OverallStatus,
}

impl PersonReport {
    /// Normalizes and verifies already-extracted records.
    pub fn from_records(person_id: impl Into<String>, raw: &RecordSet) -> Self {
        let extracted_data = normalize(raw);
        let (verification_results, overall_status) = verify(&extracted_data);
        Self {
            person_id: person_id.into(),
            extracted_data,
            verification_results,
            overall_status,
        }
    }
}

/// OCR -> pre-processing -> entity extraction for each document, then
/// normalization and verification. Never fails: extraction problems surface
/// as missing fields.
#[instrument(skip_all, fields(person = %submission.person_id))]
pub async fn process_person(
    submission: &Submission,
    text_extractor: &dyn TextExtractor,
    entity_extractor: &dyn EntityExtractor,
) -> PersonReport {
    info!(documents = submission.documents.len(), "Processing person");

    let mut extracted = RecordSet::new();
    for (slot, document) in submission.slots() {
        let text = match text_extractor.extract_text(&document.path).await {
            Some(raw) if !raw.trim().is_empty() => preprocess_text(&raw),
            _ => {
                warn!(document = %slot, doc_type = %document.doc_type, "No text extracted");
                String::new()
            }
        };

        let fields = entity_extractor
            .extract_entities(&text, &document.doc_type)
            .await;
        extracted.insert(slot, fields);
    }

    let report = PersonReport::from_records(submission.person_id.clone(), &extracted);
    info!(status = %report.overall_status, "Completed processing");
    report
}

/// Checks an ad-hoc upload: a person id, one image per configured document
/// type, and accepted image extensions.
pub fn prepare_submission(
    config: &ProjectConfig,
    person_id: &str,
    paths: Vec<PathBuf>,
) -> Result<Submission, DomainError> {
    let invalid = |reason: String| DomainError::InvalidSubmission {
        person_id: person_id.to_string(),
        reason,
    };

    if person_id.trim().is_empty() {
        return Err(invalid("person_id is required".to_string()));
    }

    if let Some(bad) = paths.iter().find(|p| {
        !p.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| config.accepts_extension(e))
    }) {
        return Err(invalid(format!(
            "invalid file type '{}' (accepted: {})",
            bad.display(),
            config.image_extensions.join(", ")
        )));
    }

    Submission::from_paths(person_id, &config.documents, paths)
}

/// Single-person use case.
pub async fn process_single(
    config: &ProjectConfig,
    extractors: &Extractors,
    person_id: &str,
    paths: Vec<PathBuf>,
) -> Result<PersonReport, IdcheckError> {
    let submission = prepare_submission(config, person_id, paths)?;
    Ok(process_person(&submission, extractors.text.as_ref(), extractors.entities.as_ref()).await)
}
