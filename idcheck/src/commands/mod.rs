// idcheck/src/commands/mod.rs

pub mod normalize;
pub mod person;
pub mod run;
pub mod verify;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use idcheck_core::domain::RecordSet;

/// Loads a record set from a JSON file, or from stdin when `input` is `-`.
pub(crate) fn read_record_set(input: &Path) -> anyhow::Result<RecordSet> {
    let content = if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read records from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read records from {}", input.display()))?
    };

    RecordSet::from_json_str(&content)
        .with_context(|| format!("Invalid record set in {}", input.display()))
}

/// Label used as `person_id` for reports built from a file.
pub(crate) fn input_label(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty() && s != "-")
        .unwrap_or_else(|| "stdin".to_string())
}
