//! User-facing messages for validation and transfer results

use crate::models::{
    Account, TransferOutcome, TransferType, ValidationIssue, ValidationReport, ACCEPTED_DOMAINS,
};

use super::account::format_currency;

/// Message shown for a single validation issue
pub fn issue_message(issue: ValidationIssue) -> String {
    match issue {
        ValidationIssue::NoAtSymbol => "Invalid Email Address! No '@' symbol.".to_string(),
        ValidationIssue::TooManyAtSymbols => {
            "Invalid Email Address! Too many '@' symbols.".to_string()
        }
        ValidationIssue::InvalidDomain => format!(
            "Invalid Email Address Domain! Valid Domains are: {}",
            ACCEPTED_DOMAINS.join(", ")
        ),
        ValidationIssue::IllegalEmailAddress => "Invalid Email Address!".to_string(),
        ValidationIssue::FieldsEmpty => "One or more fields were empty!".to_string(),
        ValidationIssue::IllegalCharacters => {
            "Fields cannot contain the '|' character!".to_string()
        }
    }
}

/// One message per issue in the report; empty when validation passed
pub fn validation_messages(report: &ValidationReport) -> Vec<String> {
    report.iter().map(issue_message).collect()
}

/// Describe the result of a deposit or withdrawal
pub fn transfer_message(
    account: &Account,
    kind: TransferType,
    outcome: &TransferOutcome,
    currency: &str,
) -> String {
    let owner = account.possessive_name();
    match (outcome, kind) {
        (TransferOutcome::Applied(transfer), TransferType::Deposit) => format!(
            "Successfully Deposited {} into {} Account!",
            format_currency(transfer.amount, currency),
            owner
        ),
        (TransferOutcome::Applied(transfer), TransferType::Withdraw) => format!(
            "Successfully Withdrew {} from {} Account!",
            format_currency(transfer.amount, currency),
            owner
        ),
        (TransferOutcome::Cancelled, kind) => format!(
            "A {kind} of {zero} was attempted! The {kind} for {owner} Account has been cancelled.",
            zero = format_currency(0, currency),
        ),
    }
}
