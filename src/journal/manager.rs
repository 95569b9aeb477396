//! Journal entry workflow over a [`JournalStore`] backend.
//!
//! Drafts may be saved in any state of repair; the balance and structure
//! rules bite at submission, and every later step goes through the
//! status transition table.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::journal::status::EntryStatus;
use crate::traits::{DefaultEntryValidator, EntryValidator, JournalStore};
use crate::types::{JournalEntry, JournalError, JournalResult};

/// Manager for journal entry lifecycle operations
pub struct JournalManager<S: JournalStore> {
    store: S,
    validator: Box<dyn EntryValidator>,
}

impl<S: JournalStore> JournalManager<S> {
    /// Create a manager with the default validator
    pub fn new(store: S) -> Self {
        Self {
            store,
            validator: Box::new(DefaultEntryValidator),
        }
    }

    /// Create a manager with a custom validator
    pub fn with_validator(store: S, validator: Box<dyn EntryValidator>) -> Self {
        Self { store, validator }
    }

    /// Save a draft entry. Drafts are allowed to be incomplete or
    /// unbalanced; only submission enforces the full rules.
    pub async fn save_draft(&mut self, entry: &JournalEntry) -> JournalResult<()> {
        if entry.status != EntryStatus::Draft {
            return Err(JournalError::Validation(format!(
                "Only draft entries can be saved from the form, not '{}'",
                entry.status
            )));
        }
        self.store.save_entry(entry).await
    }

    /// Get an entry by id
    pub async fn get_entry(&self, entry_id: Uuid) -> JournalResult<Option<JournalEntry>> {
        self.store.get_entry(entry_id).await
    }

    /// Get an entry by id, returning an error if not found
    pub async fn get_entry_required(&self, entry_id: Uuid) -> JournalResult<JournalEntry> {
        self.store
            .get_entry(entry_id)
            .await?
            .ok_or_else(|| JournalError::EntryNotFound(entry_id.to_string()))
    }

    /// List entries within a date range
    pub async fn list_entries(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> JournalResult<Vec<JournalEntry>> {
        self.store.list_entries(start_date, end_date).await
    }

    /// Submit a draft for approval. Runs full validation first, so an
    /// unbalanced entry can never leave the draft state.
    pub async fn submit(&mut self, entry_id: Uuid) -> JournalResult<JournalEntry> {
        let entry = self.get_entry_required(entry_id).await?;
        self.validator.validate_entry(&entry)?;
        self.transition(entry, EntryStatus::PendingApproval).await
    }

    /// Approve a pending entry
    pub async fn approve(&mut self, entry_id: Uuid) -> JournalResult<JournalEntry> {
        let entry = self.get_entry_required(entry_id).await?;
        self.transition(entry, EntryStatus::Approved).await
    }

    /// Post an approved entry to the ledger
    pub async fn post(&mut self, entry_id: Uuid) -> JournalResult<JournalEntry> {
        let entry = self.get_entry_required(entry_id).await?;
        self.transition(entry, EntryStatus::Posted).await
    }

    /// Send a pending or approved entry back for editing
    pub async fn return_to_draft(&mut self, entry_id: Uuid) -> JournalResult<JournalEntry> {
        let entry = self.get_entry_required(entry_id).await?;
        self.transition(entry, EntryStatus::Draft).await
    }

    /// Reverse a posted entry
    pub async fn reverse(&mut self, entry_id: Uuid) -> JournalResult<JournalEntry> {
        let entry = self.get_entry_required(entry_id).await?;
        self.transition(entry, EntryStatus::Reversed).await
    }

    /// Void an entry
    pub async fn void(&mut self, entry_id: Uuid) -> JournalResult<JournalEntry> {
        let entry = self.get_entry_required(entry_id).await?;
        self.transition(entry, EntryStatus::Void).await
    }

    async fn transition(
        &mut self,
        mut entry: JournalEntry,
        next: EntryStatus,
    ) -> JournalResult<JournalEntry> {
        entry.status = entry.status.transition_to(next)?;
        entry.updated_at = chrono::Utc::now().naive_utc();
        self.store.set_status(entry.id, entry.status).await?;
        Ok(entry)
    }
}
