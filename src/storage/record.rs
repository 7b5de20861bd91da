//! Account record codec
//!
//! An account is persisted as a fixed seven line header of `label|value`
//! pairs followed by one `date|type|amount|balance` line per transfer:
//!
//! ```text
//! First Name|Ann
//! Last Name|Lee
//! Address|1 Main St
//! Phone|412345678
//! Email|ann@gmail.com
//! AccountNo|10000001
//! Balance|200
//! Sunday, 14 August 2022 13:23:30|Deposit|200|200
//! ```
//!
//! Header lines are decoded by position; labels are written but not checked
//! on the way back in.

use thiserror::Error;

use crate::models::{Account, AccountId, PhoneNumber, Transfer, TransferType, RECORD_DELIMITER};

/// Which account attribute a header line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    FirstName,
    LastName,
    Address,
    Phone,
    Email,
    AccountNo,
    Balance,
}

impl HeaderField {
    /// Label written in front of the value
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Address => "Address",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::AccountNo => "AccountNo",
            Self::Balance => "Balance",
        }
    }
}

/// Header lines in the order they appear in a record
pub const HEADER_SCHEMA: [HeaderField; 7] = [
    HeaderField::FirstName,
    HeaderField::LastName,
    HeaderField::Address,
    HeaderField::Phone,
    HeaderField::Email,
    HeaderField::AccountNo,
    HeaderField::Balance,
];

/// Number of fields in a transfer line
const TRANSFER_FIELDS: usize = 4;

/// Problems found while encoding or decoding a record
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("account has no account number")]
    Unnumbered,

    #[error("record has {found} header lines, expected 7")]
    TruncatedHeader { found: usize },

    #[error("line {line}: missing '|' delimiter")]
    MissingDelimiter { line: usize },

    #[error("line {line}: '{value}' is not a valid {field}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: transfer has {found} fields, expected 4")]
    TransferFieldCount { line: usize, found: usize },

    /// A transfer date would split or break its record line
    #[error("transfer {index} has a date containing '|' or a line break: '{date}'")]
    IllegalTransferDate { index: usize, date: String },

    /// The record's `AccountNo` line names a different account than its file
    #[error("record is filed as {file} but holds account number {recorded}")]
    AccountNoMismatch { file: AccountId, recorded: AccountId },
}

/// Render an account as record lines
pub fn encode(account: &Account) -> Result<Vec<String>, RecordError> {
    let id = account.id().ok_or(RecordError::Unnumbered)?;

    let mut lines = Vec::with_capacity(HEADER_SCHEMA.len() + account.transfers().len());
    for field in HEADER_SCHEMA {
        let value = match field {
            HeaderField::FirstName => account.first_name.clone(),
            HeaderField::LastName => account.last_name.clone(),
            HeaderField::Address => account.address.clone(),
            HeaderField::Phone => account.phone.to_string(),
            HeaderField::Email => account.email.clone(),
            HeaderField::AccountNo => id.to_string(),
            HeaderField::Balance => account.balance().to_string(),
        };
        lines.push(format!("{}{}{}", field.label(), RECORD_DELIMITER, value));
    }

    for (i, transfer) in account.transfers().iter().enumerate() {
        if transfer
            .date
            .contains(|c: char| c == RECORD_DELIMITER || c == '\n' || c == '\r')
        {
            return Err(RecordError::IllegalTransferDate {
                index: i + 1,
                date: transfer.date.clone(),
            });
        }
        lines.push(transfer.to_string());
    }
    Ok(lines)
}

/// Rebuild an account from record lines
pub fn decode<S: AsRef<str>>(lines: &[S]) -> Result<Account, RecordError> {
    if lines.len() < HEADER_SCHEMA.len() {
        return Err(RecordError::TruncatedHeader { found: lines.len() });
    }

    let (header, body) = lines.split_at(HEADER_SCHEMA.len());
    let values = header
        .iter()
        .enumerate()
        .map(|(i, line)| header_value(line.as_ref(), i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    // values[i] corresponds to HEADER_SCHEMA[i]
    let phone = values[3]
        .parse::<PhoneNumber>()
        .map_err(|_| invalid(4, "phone number", values[3]))?;
    let id = values[5]
        .parse::<u32>()
        .map(AccountId::new)
        .map_err(|_| invalid(6, "account number", values[5]))?;
    let balance = values[6]
        .parse::<i64>()
        .map_err(|_| invalid(7, "balance", values[6]))?;

    let contact = Account::new(values[0], values[1], values[2], phone, values[4]);

    let mut transfers = Vec::with_capacity(body.len());
    for (offset, line) in body.iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        transfers.push(decode_transfer(line, HEADER_SCHEMA.len() + offset + 1)?);
    }

    Ok(Account::restore(id, contact, balance, transfers))
}

/// The value part of a `label|value` header line
fn header_value(line: &str, line_no: usize) -> Result<&str, RecordError> {
    line.split(RECORD_DELIMITER)
        .nth(1)
        .ok_or(RecordError::MissingDelimiter { line: line_no })
}

fn decode_transfer(line: &str, line_no: usize) -> Result<Transfer, RecordError> {
    let parts: Vec<&str> = line.split(RECORD_DELIMITER).collect();
    if parts.len() != TRANSFER_FIELDS {
        return Err(RecordError::TransferFieldCount {
            line: line_no,
            found: parts.len(),
        });
    }

    let amount = parts[2]
        .parse::<i64>()
        .map_err(|_| invalid(line_no, "amount", parts[2]))?;
    let balance = parts[3]
        .parse::<i64>()
        .map_err(|_| invalid(line_no, "balance", parts[3]))?;

    Ok(Transfer::new(
        parts[0],
        TransferType::from_record(parts[1]),
        amount,
        balance,
    ))
}

fn invalid(line: usize, field: &'static str, value: &str) -> RecordError {
    RecordError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    }
}
