// idcheck-core/src/domain/verification/engine.rs

use crate::domain::record::{FieldMapping, RecordSet};
use crate::domain::verification::outcome::{OverallStatus, RuleOutcome, VerificationReport};
use crate::domain::verification::rules::RULES;

/// Runs every rule of [`RULES`] over the documents of `records`.
///
/// All rules are evaluated, so the report always carries every failure at once.
/// Document order is irrelevant.
pub fn verify(records: &RecordSet) -> (VerificationReport, OverallStatus) {
    let documents: Vec<&FieldMapping> = records.documents().collect();

    let outcomes = RULES
        .iter()
        .map(|rule| RuleOutcome {
            rule: rule.name,
            result: (rule.check)(&documents),
        })
        .collect();

    let report = VerificationReport::new(outcomes);
    let status = report.overall_status();
    (report, status)
}
