//! Journal entry validation, lifecycle, and form state

pub mod balance;
pub mod form;
pub mod manager;
pub mod status;

pub use balance::{check_balance, parse_amount, BalanceCheck};
pub use form::EntryForm;
pub use manager::JournalManager;
pub use status::{submit_enabled, EntryStatus};
