//! Account display formatting
//!
//! Formats accounts for terminal output in detail and statement views.

use crate::models::Account;

/// Format a whole-unit amount with a currency symbol and thousands separators
///
/// `format_currency(1234567, "$")` gives `$1,234,567`.
pub fn format_currency(amount: i64, symbol: &str) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-{}{}", symbol, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    }
}

/// Format the contact details and balance of a single account
pub fn format_account_details(account: &Account, currency: &str) -> String {
    let number = account
        .id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "(unassigned)".to_string());

    let rows = [
        ("Account No", number),
        ("Balance", format_currency(account.balance(), currency)),
        ("First Name", account.first_name.clone()),
        ("Last Name", account.last_name.clone()),
        ("Address", account.address.clone()),
        ("Phone", account.phone.padded()),
        ("Email", account.email.clone()),
    ];

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("{:<12}{}\n", format!("{}:", label), value));
    }
    output
}

/// Format account details followed by the full transfer history
pub fn format_statement(account: &Account, currency: &str) -> String {
    let mut output = format_account_details(account, currency);
    output.push('\n');

    if account.transfers().is_empty() {
        output.push_str("No transfers recorded.\n");
        return output;
    }

    let date_width = account
        .transfers()
        .iter()
        .map(|t| t.date.len())
        .max()
        .unwrap_or(4)
        .max(4);

    output.push_str(&format!(
        "{:<date_width$}  {:<8}  {:>14}  {:>14}\n",
        "Date",
        "Type",
        "Amount",
        "Balance",
        date_width = date_width,
    ));
    output.push_str(&format!(
        "{:-<date_width$}  {:-<8}  {:->14}  {:->14}\n",
        "",
        "",
        "",
        "",
        date_width = date_width,
    ));

    for transfer in account.transfers() {
        output.push_str(&format!(
            "{:<date_width$}  {:<8}  {:>14}  {:>14}\n",
            transfer.date,
            transfer.kind,
            format_currency(transfer.amount, currency),
            format_currency(transfer.balance, currency),
            date_width = date_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, PhoneNumber};

    fn ann() -> Account {
        let mut account = Account::new(
            "Ann",
            "Lee",
            "1 Main St",
            PhoneNumber::new(412_345_678).unwrap(),
            "ann@gmail.com",
        );
        account.assign_id(AccountId::FIRST);
        account
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0, "$"), "$0");
        assert_eq!(format_currency(999, "$"), "$999");
        assert_eq!(format_currency(1_000, "$"), "$1,000");
        assert_eq!(format_currency(1_234_567, "€"), "€1,234,567");
        assert_eq!(format_currency(-25_000, "$"), "-$25,000");
    }

    #[test]
    fn test_details() {
        let mut account = ann();
        account.deposit(1_500, "d").unwrap();

        let output = format_account_details(&account, "$");
        assert!(output.contains("Account No: 10000001"));
        assert!(output.contains("Balance:    $1,500"));
        assert!(output.contains("Phone:      0412345678"));
        assert!(output.contains("Email:      ann@gmail.com"));
    }

    #[test]
    fn test_unsaved_account_details() {
        let account = Account::new("A", "B", "C", PhoneNumber::new(1).unwrap(), "a@gmail.com");
        assert!(format_account_details(&account, "$").contains("(unassigned)"));
    }

    #[test]
    fn test_statement_lists_transfers_in_order() {
        let mut account = ann();
        account.deposit(500, "Monday").unwrap();
        account.withdraw(120, "Tuesday").unwrap();

        let output = format_statement(&account, "$");
        let monday = output.find("Monday").unwrap();
        let tuesday = output.find("Tuesday").unwrap();
        assert!(monday < tuesday);
        assert!(output.contains("Withdraw"));
        assert!(output.contains("$380"));
    }

    #[test]
    fn test_empty_statement() {
        let output = format_statement(&ann(), "$");
        assert!(output.ends_with("No transfers recorded.\n"));
    }
}
