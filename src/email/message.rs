//! Account email composition

use crate::display::format_currency;
use crate::models::Account;

pub const DETAILS_SUBJECT: &str = "Your New Bank Account Details";
pub const STATEMENT_SUBJECT: &str = "Your Account Statement";

/// An HTML email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Welcome email sent when an account is opened
pub fn compose_details(account: &Account, currency: &str) -> EmailMessage {
    EmailMessage {
        to: account.email.clone(),
        subject: DETAILS_SUBJECT.to_string(),
        html_body: details_html(account, DETAILS_SUBJECT, currency),
    }
}

/// Statement email listing every transfer on the account
pub fn compose_statement(account: &Account, currency: &str) -> EmailMessage {
    let mut html_body = details_html(account, STATEMENT_SUBJECT, currency);

    if !account.transfers().is_empty() {
        html_body.push_str("<table>\n<tr><th>Date</th><th>Type</th><th>Amount</th></tr>\n");
        for transfer in account.transfers() {
            html_body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&transfer.date),
                transfer.kind,
                format_currency(transfer.amount, currency)
            ));
        }
        html_body.push_str("</table>\n");
    }

    EmailMessage {
        to: account.email.clone(),
        subject: STATEMENT_SUBJECT.to_string(),
        html_body,
    }
}

fn details_html(account: &Account, heading: &str, currency: &str) -> String {
    let number = account.id().map(|id| id.to_string()).unwrap_or_default();

    let mut html = format!("<h1>{}</h1>\n<h2>Your Account Number: {}</h2>\n", heading, number);
    for (label, value) in [
        ("First Name", escape_html(&account.first_name)),
        ("Last Name", escape_html(&account.last_name)),
        ("Address", escape_html(&account.address)),
        ("Balance", escape_html(&format_currency(account.balance(), currency))),
    ] {
        html.push_str(&format!("<p>{}: {}</p>\n", label, value));
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
