// idcheck-core/src/domain/verification/mod.rs

pub mod engine;
pub mod outcome;
pub mod rules;

pub use engine::verify;
pub use outcome::{OverallStatus, RuleOutcome, RuleResult, RuleStatus, VerificationReport};
pub use rules::{RULES, Rule, describe};
