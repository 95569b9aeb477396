//! # Journal Core
//!
//! The ledger-consistency and statement-assembly core of an accounting
//! platform: double-entry journal validation, account classification,
//! and financial statement assembly over REST-supplied balances.
//!
//! ## Features
//!
//! - **Balance validation**: debit/credit totals over form-edited journal
//!   lines, with submit gating on the double-entry invariant
//! - **Entry lifecycle**: Draft, Pending Approval, Approved, Posted,
//!   Reversed, and Void statuses with explicit transition rules
//! - **Account classification**: current/noncurrent and expense-bucket
//!   classification by chart-of-accounts code thresholds
//! - **Statement assembly**: balance sheets and income statements with
//!   grand totals derived from section subtotals by construction
//! - **Boundary validation**: typed decode of the platform's JSON payloads
//! - **Stale-fetch protection**: request-generation guard for racing screens
//!
//! ## Quick Start
//!
//! ```rust
//! use journal_core::{EntryForm, EntryKind};
//! use chrono::NaiveDate;
//!
//! let mut form = EntryForm::new(
//!     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
//!     EntryKind::Standard,
//! );
//! form.description = "Office rent".to_string();
//! form.set_account(0, "6000", "Rent Expense");
//! form.set_account(1, "1000", "Cash");
//! form.set_debit(0, "1200");
//! form.set_credit(1, "1200");
//! assert!(form.can_submit());
//! ```

pub mod journal;
pub mod statement;
pub mod sync;
pub mod traits;
pub mod types;
pub mod utils;
pub mod wire;

// Re-export commonly used types
pub use journal::*;
pub use statement::*;
pub use sync::{RequestGuard, RequestToken};
pub use traits::*;
pub use types::*;
pub use wire::{decode_balances, BalanceEntry, PostEntryLine, PostEntryRequest};
