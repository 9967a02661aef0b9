// idcheck-core/src/domain/record/field.rs

use std::fmt;

/// The fixed vocabulary of identity fields extracted from a document.
///
/// Email, Employee ID and Account Number are informational: they are carried
/// through normalization and reports but no verification rule reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    FathersName,
    DateOfBirth,
    CompleteAddress,
    PhoneNumber,
    EmailAddress,
    AadhaarNumber,
    PanNumber,
    EmployeeId,
    AccountNumber,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FullName,
        Field::FathersName,
        Field::DateOfBirth,
        Field::CompleteAddress,
        Field::PhoneNumber,
        Field::EmailAddress,
        Field::AadhaarNumber,
        Field::PanNumber,
        Field::EmployeeId,
        Field::AccountNumber,
    ];

    /// The label used as mapping key, both in extractor output and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::FathersName => "Father's Name",
            Self::DateOfBirth => "Date of Birth",
            Self::CompleteAddress => "Complete Address",
            Self::PhoneNumber => "Phone Number",
            Self::EmailAddress => "Email Address",
            Self::AadhaarNumber => "Aadhaar Number",
            Self::PanNumber => "PAN Number",
            Self::EmployeeId => "Employee ID",
            Self::AccountNumber => "Account Number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}
