// idcheck-core/src/domain/verification/outcome.rs

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleStatus {
    Pass,
    Fail,
}

impl RuleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict of one rule, with an optional explanation and the values it looked at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub status: RuleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl RuleResult {
    pub fn pass() -> Self {
        Self {
            status: RuleStatus::Pass,
            reason: None,
            values: None,
        }
    }

    pub fn fail() -> Self {
        Self {
            status: RuleStatus::Fail,
            reason: None,
            values: None,
        }
    }

    /// PASS or FAIL depending on `passed`.
    pub fn from_check(passed: bool) -> Self {
        if passed { Self::pass() } else { Self::fail() }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = Some(values);
        self
    }

    pub fn is_pass(&self) -> bool {
        self.status == RuleStatus::Pass
    }

    pub fn is_fail(&self) -> bool {
        self.status == RuleStatus::Fail
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallStatus {
    Verified,
    Failed,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "VERIFIED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: &'static str,
    pub result: RuleResult,
}

/// Results of every rule, in rule-table order.
///
/// Serializes as a JSON object `rule name -> result`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    outcomes: Vec<RuleOutcome>,
}

impl VerificationReport {
    pub fn new(outcomes: Vec<RuleOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn get(&self, rule: &str) -> Option<&RuleResult> {
        self.outcomes
            .iter()
            .find(|o| o.rule == rule)
            .map(|o| &o.result)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter()
    }

    pub fn failures(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_fail())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// FAILED as soon as one rule failed.
    pub fn overall_status(&self) -> OverallStatus {
        if self.outcomes.iter().any(|o| o.result.is_fail()) {
            OverallStatus::Failed
        } else {
            OverallStatus::Verified
        }
    }
}

impl Serialize for VerificationReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.outcomes.len()))?;
        for outcome in &self.outcomes {
            map.serialize_entry(outcome.rule, &outcome.result)?;
        }
        map.end()
    }
}
