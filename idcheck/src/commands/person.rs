// idcheck/src/commands/person.rs
//
// USE CASE: Process one person's uploaded documents.

use std::path::PathBuf;

use anyhow::Context;
use idcheck_core::application::process_single;
use idcheck_core::infrastructure::adapters::Extractors;
use idcheck_core::infrastructure::config::load_project_config;

pub async fn execute(
    project_dir: PathBuf,
    person_id: String,
    documents: Vec<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_project_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    let extractors = Extractors::from_config(&config, &project_dir)
        .context("Failed to set up extractors")?;

    let report = process_single(&config, &extractors, &person_id, documents).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
