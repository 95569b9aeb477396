//! View model for the journal entry form.
//!
//! One-way data flow: mutators update the draft lines, derived views
//! (`balance_check`, `can_submit`) are recomputed from the current state
//! on demand rather than cached in the form.

use chrono::NaiveDate;

use crate::journal::balance::{check_balance, BalanceCheck};
use crate::journal::status::{submit_enabled, EntryStatus};
use crate::types::{EntryKind, JournalLine, JournalResult};
use crate::wire::{PostEntryLine, PostEntryRequest};

/// Editable state backing the journal entry screen
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    /// Effective date of the entry
    pub entry_date: NaiveDate,
    /// Entry description
    pub description: String,
    /// Kind of entry being drafted
    pub kind: EntryKind,
    /// Lines under edit
    pub lines: Vec<JournalLine>,
    /// Lifecycle status of the entry backing this form
    pub status: EntryStatus,
}

impl EntryForm {
    /// Start a fresh draft with two empty lines, matching the blank form
    pub fn new(entry_date: NaiveDate, kind: EntryKind) -> Self {
        Self {
            entry_date,
            description: String::new(),
            kind,
            lines: vec![JournalLine::default(), JournalLine::default()],
            status: EntryStatus::Draft,
        }
    }

    /// Append an empty line
    pub fn add_line(&mut self) {
        self.lines.push(JournalLine::default());
    }

    /// Remove a line by index; ignored when out of range
    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Replace a line's account fields
    pub fn set_account(&mut self, index: usize, number: &str, name: &str) {
        if let Some(line) = self.lines.get_mut(index) {
            line.account_number = number.to_string();
            line.account_name = name.to_string();
        }
    }

    /// Update a line's debit field with the raw form text
    pub fn set_debit(&mut self, index: usize, raw: &str) {
        if let Some(line) = self.lines.get_mut(index) {
            line.debit = raw.to_string();
        }
    }

    /// Update a line's credit field with the raw form text
    pub fn set_credit(&mut self, index: usize, raw: &str) {
        if let Some(line) = self.lines.get_mut(index) {
            line.credit = raw.to_string();
        }
    }

    /// Current debit/credit totals derived from the lines
    pub fn balance_check(&self) -> BalanceCheck {
        check_balance(&self.lines)
    }

    /// Whether "Submit for Approval" should be enabled
    pub fn can_submit(&self) -> bool {
        submit_enabled(self.status, &self.balance_check())
    }

    /// Inline message for the unbalanced state, if any
    pub fn difference_message(&self) -> Option<String> {
        let check = self.balance_check();
        if check.is_balanced {
            None
        } else {
            Some(format!("Out of balance by {}", check.display_difference()))
        }
    }

    /// Build the posting request for this draft.
    ///
    /// Runs full boundary validation, so a form that never balanced (or
    /// that carries malformed account numbers) cannot produce a request.
    pub fn to_request(&self) -> JournalResult<PostEntryRequest> {
        let request = PostEntryRequest {
            entry_date: self.entry_date,
            description: self.description.clone(),
            entry_type: self.kind,
            lines: self
                .lines
                .iter()
                .map(|line| PostEntryLine {
                    account_number: line.account_number.clone(),
                    debit: line.debit.clone(),
                    credit: line.credit.clone(),
                    description: line.description.clone(),
                })
                .collect(),
        };
        request.validate()?;
        Ok(request)
    }
}
