// idcheck/src/commands/verify.rs
//
// USE CASE: Verify an already-extracted record set.

use std::path::PathBuf;

use comfy_table::Table;
use idcheck_core::application::PersonReport;
use idcheck_core::domain::verification::{OverallStatus, RuleResult, describe};

use super::{input_label, read_record_set};
use crate::cli::OutputFormat;

pub fn execute(input: PathBuf, format: OutputFormat, check: bool) -> anyhow::Result<()> {
    let raw = read_record_set(&input)?;
    let report = PersonReport::from_records(input_label(&input), &raw);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["Rule", "Check", "Status", "Details"]);
            for outcome in report.verification_results.iter() {
                table.add_row(vec![
                    outcome.rule.to_string(),
                    describe(outcome.rule).unwrap_or_default().to_string(),
                    outcome.result.status.to_string(),
                    details(&outcome.result),
                ]);
            }
            println!("{table}");
            println!("Overall: {}", report.overall_status);
        }
    }

    if check && report.overall_status == OverallStatus::Failed {
        eprintln!(
            "\n💥 --check mode: {} rule(s) failed.",
            report.verification_results.failures().count()
        );
        std::process::exit(1);
    }

    Ok(())
}

fn details(result: &RuleResult) -> String {
    match (&result.reason, &result.values) {
        (Some(reason), _) => reason.clone(),
        (None, Some(values)) => values.join(" | "),
        (None, None) => String::new(),
    }
}
