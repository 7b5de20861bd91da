//! Account field validation
//!
//! Validation reports every violated rule at once so a caller can show all
//! problems in a single pass instead of one per retry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Field delimiter of the account record format
pub const RECORD_DELIMITER: char = '|';

/// Email suffixes accepted for new accounts
pub const ACCEPTED_DOMAINS: [&str; 4] = [
    "@gmail.com",
    "@outlook.com",
    "@student.uts.edu.au",
    "@uts.edu.au",
];

/// A single validation rule that an account violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// The email has no '@'
    NoAtSymbol,
    /// The email has more than one '@'
    TooManyAtSymbols,
    /// The email domain is not one of [`ACCEPTED_DOMAINS`]
    InvalidDomain,
    /// The email starts with '@' or does not start with a letter
    IllegalEmailAddress,
    /// A required text field is empty after trimming
    FieldsEmpty,
    /// A text field contains the record delimiter
    IllegalCharacters,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The union of all issues found while validating an account
///
/// An empty report means validation passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: BTreeSet<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no rule was violated
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn contains(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }

    pub fn insert(&mut self, issue: ValidationIssue) {
        self.issues.insert(issue);
    }

    /// Record `issue` when `violated` holds
    fn flag(&mut self, violated: bool, issue: ValidationIssue) {
        if violated {
            self.insert(issue);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ValidationIssue> + '_ {
        self.issues.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl FromIterator<ValidationIssue> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return f.write_str("Passed");
        }
        let names: Vec<String> = self.iter().map(|i| i.to_string()).collect();
        f.write_str(&names.join(", "))
    }
}

/// Borrowed view of the text fields that validation inspects
#[derive(Debug, Clone, Copy)]
pub struct ContactFields<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub email: &'a str,
}

impl<'a> ContactFields<'a> {
    fn all(&self) -> [&'a str; 4] {
        [self.first_name, self.last_name, self.address, self.email]
    }
}

/// Run every rule against `fields` and collect the violations
pub fn validate(fields: ContactFields<'_>) -> ValidationReport {
    let mut report = ValidationReport::new();

    report.flag(
        fields.all().iter().any(|f| f.trim().is_empty()),
        ValidationIssue::FieldsEmpty,
    );

    let email = fields.email;
    let at_count = email.matches('@').count();
    report.flag(at_count == 0, ValidationIssue::NoAtSymbol);
    report.flag(at_count > 1, ValidationIssue::TooManyAtSymbols);
    report.flag(!has_accepted_domain(email), ValidationIssue::InvalidDomain);
    report.flag(!has_legal_prefix(email), ValidationIssue::IllegalEmailAddress);

    report.flag(
        fields.all().iter().any(|f| f.contains(RECORD_DELIMITER)),
        ValidationIssue::IllegalCharacters,
    );

    report
}

/// Exactly one accepted suffix must match.
///
/// Matches are accumulated with XOR, so an address that ended with two of the
/// suffixes at once would be rejected. None of the current suffixes is a
/// suffix of another, so this cannot happen with the list as it stands.
fn has_accepted_domain(email: &str) -> bool {
    ACCEPTED_DOMAINS
        .iter()
        .fold(false, |acc, domain| acc ^ email.ends_with(domain))
}

fn has_legal_prefix(email: &str) -> bool {
    match email.chars().next() {
        Some(first) => first != '@' && first.is_alphabetic(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str) -> ContactFields<'_> {
        ContactFields {
            first_name: "Ann",
            last_name: "Lee",
            address: "1 Main St",
            email,
        }
    }

    #[test]
    fn test_valid_fields_pass() {
        for email in [
            "ann@gmail.com",
            "ann@outlook.com",
            "ann@student.uts.edu.au",
            "ann@uts.edu.au",
        ] {
            let report = validate(fields(email));
            assert!(report.passed(), "{} -> {}", email, report);
        }
    }

    #[test]
    fn test_no_at_symbol() {
        let report = validate(fields("anngmail.com"));
        assert!(report.contains(ValidationIssue::NoAtSymbol));
        assert!(!report.contains(ValidationIssue::TooManyAtSymbols));
        assert!(report.contains(ValidationIssue::InvalidDomain));
    }

    #[test]
    fn test_too_many_at_symbols() {
        let report = validate(fields("ann@lee@gmail.com"));
        assert!(report.contains(ValidationIssue::TooManyAtSymbols));
        assert!(!report.contains(ValidationIssue::NoAtSymbol));
        // The suffix still matches
        assert!(!report.contains(ValidationIssue::InvalidDomain));
    }

    #[test]
    fn test_domain_check() {
        assert!(!validate(fields("ann@gmail.com")).contains(ValidationIssue::InvalidDomain));
        assert!(validate(fields("ann@yahoo.com")).contains(ValidationIssue::InvalidDomain));
        assert!(validate(fields("ann@gmail.com.au")).contains(ValidationIssue::InvalidDomain));
    }

    #[test]
    fn test_illegal_prefix() {
        let report = validate(fields("@gmail.com"));
        assert!(report.contains(ValidationIssue::IllegalEmailAddress));

        let report = validate(fields("1ann@gmail.com"));
        assert_eq!(
            report.iter().collect::<Vec<_>>(),
            vec![ValidationIssue::IllegalEmailAddress]
        );
    }

    #[test]
    fn test_empty_fields() {
        let mut f = fields("ann@gmail.com");
        f.address = "   ";
        let report = validate(f);
        assert_eq!(
            report.iter().collect::<Vec<_>>(),
            vec![ValidationIssue::FieldsEmpty]
        );
    }

    #[test]
    fn test_empty_email_reports_everything() {
        let report = validate(fields(""));
        assert!(report.contains(ValidationIssue::FieldsEmpty));
        assert!(report.contains(ValidationIssue::NoAtSymbol));
        assert!(report.contains(ValidationIssue::InvalidDomain));
        assert!(report.contains(ValidationIssue::IllegalEmailAddress));
    }

    #[test]
    fn test_delimiter_is_illegal() {
        let mut f = fields("ann@gmail.com");
        f.last_name = "Lee|Smith";
        let report = validate(f);
        assert_eq!(
            report.iter().collect::<Vec<_>>(),
            vec![ValidationIssue::IllegalCharacters]
        );
    }

    #[test]
    fn test_multiple_issues_are_aggregated() {
        let mut f = fields("@@yahoo.com");
        f.first_name = "";
        let report = validate(f);
        assert_eq!(report.len(), 4);
        assert_eq!(
            report.to_string(),
            "TooManyAtSymbols, InvalidDomain, IllegalEmailAddress, FieldsEmpty"
        );
    }

    #[test]
    fn test_report_display_passed() {
        assert_eq!(ValidationReport::new().to_string(), "Passed");
    }
}
