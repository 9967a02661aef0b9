// idcheck/src/commands/normalize.rs
//
// USE CASE: Show the canonical form of extracted fields.

use std::path::PathBuf;

use super::read_record_set;

pub fn execute(input: PathBuf) -> anyhow::Result<()> {
    let raw = read_record_set(&input)?;
    let normalized = idcheck_core::normalize(&raw);
    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}
