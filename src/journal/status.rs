//! Journal entry lifecycle status and transition rules.
//!
//! The authoritative transition (who may approve, what gets persisted)
//! lives server-side; this module encodes which transitions are legal at
//! all, so the client can enable or disable the matching affordances.

use serde::{Deserialize, Serialize};

use crate::journal::balance::BalanceCheck;
use crate::types::{JournalError, JournalResult};

/// Lifecycle status of a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryStatus {
    /// Being edited, not yet submitted
    Draft,
    /// Submitted and awaiting approval
    PendingApproval,
    /// Approved but not yet posted to the ledger
    Approved,
    /// Posted to the ledger
    Posted,
    /// Posted entry reversed by a reversing entry (terminal)
    Reversed,
    /// Cancelled before taking effect (terminal)
    Void,
}

impl EntryStatus {
    /// Statuses reachable from this one
    pub fn successors(&self) -> &'static [EntryStatus] {
        match self {
            EntryStatus::Draft => &[EntryStatus::PendingApproval, EntryStatus::Void],
            EntryStatus::PendingApproval => &[EntryStatus::Approved, EntryStatus::Draft],
            EntryStatus::Approved => &[EntryStatus::Posted, EntryStatus::Draft],
            EntryStatus::Posted => &[EntryStatus::Reversed, EntryStatus::Void],
            EntryStatus::Reversed | EntryStatus::Void => &[],
        }
    }

    /// Whether a transition to `next` is legal
    pub fn can_transition_to(&self, next: EntryStatus) -> bool {
        self.successors().contains(&next)
    }

    /// Whether this status admits no further transitions
    pub fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }

    /// Validate a transition, returning a typed error when illegal
    pub fn transition_to(&self, next: EntryStatus) -> JournalResult<EntryStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(JournalError::InvalidTransition {
                from: *self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EntryStatus::Draft => "Draft",
            EntryStatus::PendingApproval => "Pending Approval",
            EntryStatus::Approved => "Approved",
            EntryStatus::Posted => "Posted",
            EntryStatus::Reversed => "Reversed",
            EntryStatus::Void => "Void",
        };
        f.write_str(label)
    }
}

/// Whether the "Submit for Approval" affordance should be enabled.
///
/// Only a balanced draft may be submitted; every other status already
/// left the editing stage.
pub fn submit_enabled(status: EntryStatus, check: &BalanceCheck) -> bool {
    status == EntryStatus::Draft && check.is_balanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::balance::check_balance;
    use crate::types::JournalLine;

    #[test]
    fn draft_submits_to_pending() {
        assert!(EntryStatus::Draft.can_transition_to(EntryStatus::PendingApproval));
        assert!(!EntryStatus::Draft.can_transition_to(EntryStatus::Posted));
    }

    #[test]
    fn pending_can_be_approved_or_returned() {
        assert!(EntryStatus::PendingApproval.can_transition_to(EntryStatus::Approved));
        assert!(EntryStatus::PendingApproval.can_transition_to(EntryStatus::Draft));
        assert!(!EntryStatus::PendingApproval.can_transition_to(EntryStatus::Reversed));
    }

    #[test]
    fn posted_only_reverses_or_voids() {
        assert!(EntryStatus::Posted.can_transition_to(EntryStatus::Reversed));
        assert!(EntryStatus::Posted.can_transition_to(EntryStatus::Void));
        assert!(!EntryStatus::Posted.can_transition_to(EntryStatus::Draft));
    }

    #[test]
    fn reversed_and_void_are_terminal() {
        assert!(EntryStatus::Reversed.is_terminal());
        assert!(EntryStatus::Void.is_terminal());
        assert!(!EntryStatus::Approved.is_terminal());
    }

    #[test]
    fn illegal_transition_is_typed_error() {
        let err = EntryStatus::Void
            .transition_to(EntryStatus::Draft)
            .unwrap_err();
        assert!(matches!(
            err,
            JournalError::InvalidTransition {
                from: EntryStatus::Void,
                to: EntryStatus::Draft
            }
        ));
    }

    #[test]
    fn submit_requires_balanced_draft() {
        let balanced = check_balance(&[
            JournalLine::debit("1000", "Cash", "100"),
            JournalLine::credit("4000", "Sales Revenue", "100"),
        ]);
        let unbalanced = check_balance(&[JournalLine::debit("1000", "Cash", "100")]);

        assert!(submit_enabled(EntryStatus::Draft, &balanced));
        assert!(!submit_enabled(EntryStatus::Draft, &unbalanced));
        assert!(!submit_enabled(EntryStatus::PendingApproval, &balanced));
        assert!(!submit_enabled(EntryStatus::Posted, &balanced));
    }
}
