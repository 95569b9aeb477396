//! Traits abstracting the remote backend and entry validation.
//!
//! The platform's REST endpoints sit behind these seams so the core can
//! be exercised against an in-memory backend in tests and development.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use uuid::Uuid;

use crate::journal::balance::check_balance;
use crate::journal::status::EntryStatus;
use crate::statement::assemble::ClassifiedAccount;
use crate::types::{JournalEntry, JournalError, JournalResult};

/// Source of account balances for statement assembly
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Fetch all account balances, keyed by account name, optionally as
    /// of a specific date
    async fn fetch_balances(
        &self,
        as_of_date: Option<NaiveDate>,
    ) -> JournalResult<HashMap<String, ClassifiedAccount>>;
}

/// Backend holding journal entries and their lifecycle status
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Save a new or updated entry
    async fn save_entry(&mut self, entry: &JournalEntry) -> JournalResult<()>;

    /// Get an entry by id
    async fn get_entry(&self, entry_id: Uuid) -> JournalResult<Option<JournalEntry>>;

    /// List entries within a date range
    async fn list_entries(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> JournalResult<Vec<JournalEntry>>;

    /// Replace an entry's status; the caller is responsible for checking
    /// the transition is legal
    async fn set_status(&mut self, entry_id: Uuid, status: EntryStatus) -> JournalResult<()>;
}

/// Trait for implementing custom entry validation rules
pub trait EntryValidator: Send + Sync {
    /// Validate an entry before it is saved or submitted
    fn validate_entry(&self, entry: &JournalEntry) -> JournalResult<()>;
}

/// Default entry validator enforcing the double-entry basics
pub struct DefaultEntryValidator;

impl EntryValidator for DefaultEntryValidator {
    fn validate_entry(&self, entry: &JournalEntry) -> JournalResult<()> {
        if entry.description.trim().is_empty() {
            return Err(JournalError::Validation(
                "Entry description cannot be empty".to_string(),
            ));
        }

        if entry.lines.len() < 2 {
            return Err(JournalError::Validation(
                "Entry must have at least two lines for double-entry bookkeeping".to_string(),
            ));
        }

        let check = check_balance(&entry.lines);
        if !check.is_balanced {
            return Err(JournalError::Validation(format!(
                "Entry is not balanced: debits = {}, credits = {}",
                check.total_debits, check.total_credits
            )));
        }

        Ok(())
    }
}
