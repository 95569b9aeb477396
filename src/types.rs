//! Core types and data structures for journal and statement processing

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::journal::status::EntryStatus;

/// Statement roles following standard accounting principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementRole {
    /// Assets - what the business owns (Cash, Inventory, Equipment, etc.)
    Asset,
    /// Liabilities - what the business owes (Loans, Accounts Payable, etc.)
    Liability,
    /// Equity - owner's interest in the business (Capital, Retained Earnings, etc.)
    Equity,
    /// Revenue - money earned by the business
    Revenue,
    /// Expenses - costs incurred by the business
    Expense,
}

impl StatementRole {
    /// Returns the normal balance side for this role.
    /// Assets and Expenses normally carry debit balances;
    /// Liabilities, Equity, and Revenue normally carry credit balances.
    pub fn normal_balance(&self) -> Side {
        match self {
            StatementRole::Asset | StatementRole::Expense => Side::Debit,
            StatementRole::Liability | StatementRole::Equity | StatementRole::Revenue => {
                Side::Credit
            }
        }
    }
}

/// The two sides of a double-entry posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Debit - increases Assets and Expenses, decreases the rest
    Debit,
    /// Credit - increases Liabilities, Equity, and Revenue, decreases the rest
    Credit,
}

/// A validated account code from the chart of accounts.
///
/// Codes are ASCII-digit strings by convention (typically four digits,
/// e.g. "1000" for Cash). Construction rejects anything non-numeric up
/// front rather than letting malformed codes fall through classification
/// silently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountCode(String);

impl AccountCode {
    /// Maximum code length accepted, generous relative to the four-digit convention
    pub const MAX_LEN: usize = 8;

    /// Parse and validate an account code
    pub fn new(code: impl Into<String>) -> JournalResult<Self> {
        let code = code.into();
        let trimmed = code.trim();

        if trimmed.is_empty() {
            return Err(JournalError::InvalidAccountCode(
                "account code cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > Self::MAX_LEN {
            return Err(JournalError::InvalidAccountCode(format!(
                "account code '{}' exceeds {} characters",
                trimmed,
                Self::MAX_LEN
            )));
        }

        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JournalError::InvalidAccountCode(format!(
                "account code '{}' is not numeric",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The code as entered, without padding changes
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the code, used for threshold classification and
    /// ordering. Infallible: the constructor guarantees digits only.
    pub fn numeric(&self) -> u64 {
        self.0
            .bytes()
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
    }

    /// Leading digit of the code, used for expense sub-classification
    pub fn leading_digit(&self) -> u8 {
        self.0.as_bytes()[0] - b'0'
    }
}

impl TryFrom<String> for AccountCode {
    type Error = JournalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountCode> for String {
    fn from(code: AccountCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for AccountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single account with its current balance, as supplied by the
/// balances endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Account code from the chart of accounts
    pub code: AccountCode,
    /// Human-readable account name
    pub name: String,
    /// Current balance in the account's normal-balance convention
    pub balance: BigDecimal,
}

impl AccountBalance {
    /// Create an account balance record
    pub fn new(code: AccountCode, name: impl Into<String>, balance: BigDecimal) -> Self {
        Self {
            code,
            name: name.into(),
            balance,
        }
    }
}

/// Kinds of journal entries accepted by the posting endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Regular day-to-day entry
    Standard,
    /// Period-end adjustment
    Adjusting,
    /// Closing entry rolling temporary accounts into equity
    Closing,
    /// Reversal of a previously posted entry
    Reversing,
}

/// A single line of an in-progress journal entry.
///
/// Debit and credit amounts are kept as the strings edited in the entry
/// form; [`crate::journal::balance`] owns the lenient parse into decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JournalLine {
    /// Account code the line posts to
    pub account_number: String,
    /// Account name for display
    pub account_name: String,
    /// Debit amount as edited (empty means zero)
    pub debit: String,
    /// Credit amount as edited (empty means zero)
    pub credit: String,
    /// Optional line-level memo
    pub description: String,
}

impl JournalLine {
    /// Create a line with explicit debit and credit strings
    pub fn new(
        account_number: impl Into<String>,
        account_name: impl Into<String>,
        debit: impl Into<String>,
        credit: impl Into<String>,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            account_name: account_name.into(),
            debit: debit.into(),
            credit: credit.into(),
            description: String::new(),
        }
    }

    /// Create a debit-side line
    pub fn debit(
        account_number: impl Into<String>,
        account_name: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self::new(account_number, account_name, amount, "")
    }

    /// Create a credit-side line
    pub fn credit(
        account_number: impl Into<String>,
        account_name: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self::new(account_number, account_name, "", amount)
    }
}

/// Complete journal entry with its lifecycle status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier for the entry
    pub id: Uuid,
    /// Date the entry takes effect
    pub entry_date: NaiveDate,
    /// Description of the entry
    pub description: String,
    /// Kind of entry
    pub kind: EntryKind,
    /// Lines that make up this entry
    pub lines: Vec<JournalLine>,
    /// Current lifecycle status
    pub status: EntryStatus,
    /// When the entry was created
    pub created_at: NaiveDateTime,
    /// When the entry was last updated
    pub updated_at: NaiveDateTime,
}

impl JournalEntry {
    /// Create a new draft entry
    pub fn new(entry_date: NaiveDate, description: impl Into<String>, kind: EntryKind) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4(),
            entry_date,
            description: description.into(),
            kind,
            lines: Vec::new(),
            status: EntryStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a line to the entry
    pub fn add_line(&mut self, line: JournalLine) {
        self.lines.push(line);
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

/// Errors that can occur in the journal and statement core
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Invalid account code: {0}")]
    InvalidAccountCode(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: EntryStatus, to: EntryStatus },
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Entry not found: {0}")]
    EntryNotFound(String),
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for journal-core operations
pub type JournalResult<T> = Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_code_accepts_digits() {
        let code = AccountCode::new("1499").unwrap();
        assert_eq!(code.as_str(), "1499");
        assert_eq!(code.numeric(), 1499);
        assert_eq!(code.leading_digit(), 1);
    }

    #[test]
    fn account_code_trims_whitespace() {
        let code = AccountCode::new("  2500 ").unwrap();
        assert_eq!(code.as_str(), "2500");
    }

    #[test]
    fn account_code_rejects_non_numeric() {
        assert!(AccountCode::new("12AB").is_err());
        assert!(AccountCode::new("").is_err());
        assert!(AccountCode::new("   ").is_err());
        assert!(AccountCode::new("1.5").is_err());
        assert!(AccountCode::new("-100").is_err());
    }

    #[test]
    fn account_code_rejects_overlong() {
        assert!(AccountCode::new("123456789").is_err());
    }

    #[test]
    fn normal_balance_sides() {
        assert_eq!(StatementRole::Asset.normal_balance(), Side::Debit);
        assert_eq!(StatementRole::Expense.normal_balance(), Side::Debit);
        assert_eq!(StatementRole::Liability.normal_balance(), Side::Credit);
        assert_eq!(StatementRole::Equity.normal_balance(), Side::Credit);
        assert_eq!(StatementRole::Revenue.normal_balance(), Side::Credit);
    }

    #[test]
    fn account_code_serde_round_trip() {
        let code = AccountCode::new("4100").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"4100\"");
        let back: AccountCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn account_code_serde_rejects_malformed() {
        assert!(serde_json::from_str::<AccountCode>("\"abc\"").is_err());
    }
}
