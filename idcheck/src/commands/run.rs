// idcheck/src/commands/run.rs
//
// USE CASE: Process the whole dataset.

use std::path::PathBuf;

use anyhow::Context;
use idcheck_core::application::run_batch;
use idcheck_core::domain::verification::OverallStatus;
use idcheck_core::infrastructure::adapters::Extractors;
use idcheck_core::infrastructure::config::load_project_config;

pub async fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    println!("⚙️  Loading configuration...");
    let config = load_project_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    println!("   Project: {}", config.name);
    println!("   Documents: {}", config.documents.join(", "));

    let extractors = Extractors::from_config(&config, &project_dir)
        .context("Failed to set up extractors")?;

    let result = match run_batch(&project_dir, &config, &extractors).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("\n💥 CRITICAL BATCH ERROR: {}", e);
            std::process::exit(1);
        }
    };

    for skipped in &result.skipped {
        eprintln!(
            "   ⚠️  Skipped '{}': missing {}",
            skipped.person_id,
            skipped.missing.join(", ")
        );
    }

    println!(
        "\n✨ Processed {} person(s) in {:.2?}: {} verified, {} failed, {} skipped",
        result.reports.len(),
        start.elapsed(),
        result.count(OverallStatus::Verified),
        result.count(OverallStatus::Failed),
        result.skipped.len()
    );
    println!("📄 Results saved to {}", result.output_file.display());

    Ok(())
}
