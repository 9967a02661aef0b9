// idcheck-core/src/application/batch.rs

use futures::StreamExt;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::application::pipeline::{PersonReport, process_person};
use crate::domain::project::ProjectConfig;
use crate::domain::verification::OverallStatus;
use crate::error::IdcheckError;
use crate::infrastructure::adapters::Extractors;
use crate::infrastructure::dataset::{SkippedPerson, discover_submissions};
use crate::infrastructure::fs::save_json;

#[derive(Debug)]
pub struct BatchResult {
    /// One report per complete submission, in person-id order.
    pub reports: Vec<PersonReport>,
    pub skipped: Vec<SkippedPerson>,
    pub output_file: PathBuf,
}

impl BatchResult {
    pub fn count(&self, status: OverallStatus) -> usize {
        self.reports
            .iter()
            .filter(|r| r.overall_status == status)
            .count()
    }
}

/// Processes every complete person folder of the dataset and writes all
/// reports to the configured output file.
///
/// Persons are independent, so up to `concurrency` of them run at once; the
/// output keeps the sorted dataset order.
#[instrument(skip(config, extractors), fields(project = %config.name))]
pub async fn run_batch(
    project_dir: &Path,
    config: &ProjectConfig,
    extractors: &Extractors,
) -> Result<BatchResult, IdcheckError> {
    let dataset_dir = config.dataset_dir(project_dir);
    info!(dataset = ?dataset_dir, "Scanning dataset");
    let scan = discover_submissions(&dataset_dir, config)?;
    info!(
        persons = scan.submissions.len(),
        skipped = scan.skipped.len(),
        "Dataset scanned"
    );

    let text = extractors.text.as_ref();
    let entities = extractors.entities.as_ref();

    let reports: Vec<PersonReport> = futures::stream::iter(scan.submissions.iter())
        .map(|submission| process_person(submission, text, entities))
        .buffered(config.concurrency)
        .collect()
        .await;

    let output_file = config.output_file(project_dir);
    save_json(&output_file, &reports)?;

    Ok(BatchResult {
        reports,
        skipped: scan.skipped,
        output_file,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::pipeline::tests::{MockLlm, MockOcr, consistent_answers};
    use anyhow::Result;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn write_person(root: &Path, person: &str, docs: &[&str]) -> Result<()> {
        let dir = root.join("dataset").join(person);
        fs::create_dir_all(&dir)?;
        for doc in docs {
            fs::write(dir.join(format!("{person}_{doc}.png")), b"")?;
        }
        Ok(())
    }

    fn extractors() -> Extractors {
        Extractors {
            text: Arc::new(MockOcr::default()),
            entities: Arc::new(MockLlm {
                answers: consistent_answers(),
                ..Default::default()
            }),
        }
    }

    #[tokio::test]
    async fn test_run_batch_writes_reports() -> Result<()> {
        let dir = tempdir()?;
        let all = ["government_id", "bank_statement", "employment_letter"];
        write_person(dir.path(), "p2", &all)?;
        write_person(dir.path(), "p1", &all)?;
        write_person(dir.path(), "p3", &all[..2])?;

        let mut config = ProjectConfig::new("kyc");
        config.output_path = "out/results.json".into();

        let result = run_batch(dir.path(), &config, &extractors()).await?;

        let ids: Vec<&str> = result.reports.iter().map(|r| r.person_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert_eq!(result.count(OverallStatus::Verified), 2);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].person_id, "p3");

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("out/results.json"))?)?;
        assert_eq!(written.as_array().map(Vec::len), Some(2));
        assert_eq!(written[0]["person_id"], "p1");
        assert_eq!(written[0]["overall_status"], "VERIFIED");
        Ok(())
    }

    #[tokio::test]
    async fn test_run_batch_without_dataset_fails() -> Result<()> {
        let dir = tempdir()?;
        let config = ProjectConfig::new("kyc");
        let result = run_batch(dir.path(), &config, &extractors()).await;
        assert!(matches!(result, Err(IdcheckError::Infrastructure(_))));
        Ok(())
    }
}
