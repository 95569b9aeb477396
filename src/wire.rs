//! JSON boundary types for the platform's REST endpoints.
//!
//! Incoming payloads are validated here and rejected with a typed error,
//! rather than flowing malformed data into classification or totals. The
//! one deliberate exception: an account with no balance field decodes as
//! zero, so a statement screen always has something to render.

use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::journal::balance::check_balance;
use crate::statement::assemble::ClassifiedAccount;
use crate::types::{
    AccountBalance, AccountCode, EntryKind, JournalError, JournalLine, JournalResult,
    StatementRole,
};

/// Longest description accepted by the posting endpoint
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// One account as it appears in the balances response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    /// Account code string
    pub number: String,
    /// Account name
    pub name: String,
    /// Statement role assigned server-side
    pub role: StatementRole,
    /// Balance; endpoints omit the field for accounts with no activity
    #[serde(default)]
    pub balance: Option<BigDecimal>,
}

/// Decode the `GET accounts/balances` payload into classified accounts
/// keyed by account name.
///
/// Malformed JSON and non-numeric account codes are hard errors; a
/// missing balance defaults to zero.
pub fn decode_balances(json: &str) -> JournalResult<HashMap<String, ClassifiedAccount>> {
    let raw: HashMap<String, BalanceEntry> =
        serde_json::from_str(json).map_err(|e| JournalError::Decode(e.to_string()))?;

    let mut accounts = HashMap::with_capacity(raw.len());
    for (key, entry) in raw {
        let code = AccountCode::new(entry.number)?;
        let balance = entry.balance.unwrap_or_else(BigDecimal::zero);
        accounts.insert(
            key,
            ClassifiedAccount::new(entry.role, AccountBalance::new(code, entry.name, balance)),
        );
    }
    Ok(accounts)
}

/// One line of the posting request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEntryLine {
    /// Account code the line posts to
    pub account_number: String,
    /// Debit amount as entered
    pub debit: String,
    /// Credit amount as entered
    pub credit: String,
    /// Line-level memo
    #[serde(default)]
    pub description: String,
}

/// Body of `POST journal-entries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEntryRequest {
    /// Effective date of the entry
    pub entry_date: NaiveDate,
    /// Entry description
    pub description: String,
    /// Kind of entry
    pub entry_type: EntryKind,
    /// Entry lines; at least two for double entry
    pub lines: Vec<PostEntryLine>,
}

impl PostEntryRequest {
    /// Validate the request before it may be sent.
    ///
    /// Checks structure (line count, description, account codes) and the
    /// double-entry invariant; an unbalanced entry never leaves the
    /// client.
    pub fn validate(&self) -> JournalResult<()> {
        if self.description.trim().is_empty() {
            return Err(JournalError::Validation(
                "Entry description cannot be empty".to_string(),
            ));
        }

        if self.description.len() > MAX_DESCRIPTION_LEN {
            return Err(JournalError::Validation(format!(
                "Entry description cannot exceed {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }

        if self.lines.len() < 2 {
            return Err(JournalError::Validation(
                "Entry must have at least two lines for double-entry bookkeeping".to_string(),
            ));
        }

        for line in &self.lines {
            AccountCode::new(line.account_number.as_str())?;
        }

        let check = check_balance(&self.journal_lines());
        if !check.is_balanced {
            return Err(JournalError::Validation(format!(
                "Entry is not balanced: debits = {}, credits = {}",
                check.total_debits, check.total_credits
            )));
        }

        Ok(())
    }

    /// View the request lines as journal lines for balance checking
    fn journal_lines(&self) -> Vec<JournalLine> {
        self.lines
            .iter()
            .map(|line| JournalLine {
                account_number: line.account_number.clone(),
                account_name: String::new(),
                debit: line.debit.clone(),
                credit: line.credit.clone(),
                description: line.description.clone(),
            })
            .collect()
    }

    /// Serialize the validated request body
    pub fn to_json(&self) -> JournalResult<String> {
        self.validate()?;
        serde_json::to_string(self).map_err(|e| JournalError::Decode(e.to_string()))
    }
}
