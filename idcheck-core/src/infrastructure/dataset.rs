// idcheck-core/src/infrastructure/dataset.rs
//
// Layout: <dataset>/<person_id>/<person_id>_<document_type>.<ext>

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::project::{DocumentImage, ProjectConfig, Submission};
use crate::infrastructure::error::InfrastructureError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPerson {
    pub person_id: String,
    pub missing: Vec<String>,
}

#[derive(Debug, Default)]
pub struct DatasetScan {
    /// Complete submissions, sorted by person id.
    pub submissions: Vec<Submission>,
    pub skipped: Vec<SkippedPerson>,
}

/// Lists every person folder of the dataset. Persons missing one of the
/// expected documents are reported in `skipped`; loose files are ignored.
pub fn discover_submissions(
    dataset_dir: &Path,
    config: &ProjectConfig,
) -> Result<DatasetScan, InfrastructureError> {
    if !dataset_dir.is_dir() {
        return Err(InfrastructureError::DatasetNotFound(
            dataset_dir.display().to_string(),
        ));
    }

    let mut scan = DatasetScan::default();

    let walker = WalkDir::new(dataset_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = ?e.path(), error = %e, "Skipping unreadable dataset entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let person_id = entry.file_name().to_string_lossy().to_string();

        let mut documents = Vec::with_capacity(config.documents.len());
        let mut missing = Vec::new();
        for doc_type in &config.documents {
            match find_image(entry.path(), &person_id, doc_type, &config.image_extensions) {
                Some(path) => documents.push(DocumentImage {
                    doc_type: doc_type.clone(),
                    path,
                }),
                None => missing.push(doc_type.clone()),
            }
        }

        if missing.is_empty() {
            debug!(person = %person_id, "Found complete submission");
            scan.submissions.push(Submission::new(person_id, documents));
        } else {
            warn!(person = %person_id, ?missing, "Skipping person: missing documents");
            scan.skipped.push(SkippedPerson { person_id, missing });
        }
    }

    Ok(scan)
}

fn find_image(
    person_dir: &Path,
    person_id: &str,
    doc_type: &str,
    extensions: &[String],
) -> Option<PathBuf> {
    extensions
        .iter()
        .map(|ext| person_dir.join(format!("{person_id}_{doc_type}.{ext}")))
        .find(|p| p.is_file())
}
