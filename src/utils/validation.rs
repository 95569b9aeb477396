//! Validation utilities

use bigdecimal::{BigDecimal, Zero};

use crate::journal::balance::parse_amount;
use crate::traits::{DefaultEntryValidator, EntryValidator};
use crate::types::{AccountCode, JournalEntry, JournalError, JournalResult};

/// Validate that an account name is usable for display
pub fn validate_account_name(name: &str) -> JournalResult<()> {
    if name.trim().is_empty() {
        return Err(JournalError::Validation(
            "Account name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(JournalError::Validation(
            "Account name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate an entry description
pub fn validate_description(description: &str) -> JournalResult<()> {
    if description.trim().is_empty() {
        return Err(JournalError::Validation(
            "Description cannot be empty".to_string(),
        ));
    }

    if description.len() > 500 {
        return Err(JournalError::Validation(
            "Description cannot exceed 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Strict entry validator with detailed per-line checks.
///
/// On top of the default rules it requires valid account codes, rejects
/// lines carrying both a debit and a credit, and rejects the same
/// account appearing twice on the same side.
pub struct StrictEntryValidator;

impl EntryValidator for StrictEntryValidator {
    fn validate_entry(&self, entry: &JournalEntry) -> JournalResult<()> {
        DefaultEntryValidator.validate_entry(entry)?;
        validate_description(&entry.description)?;

        let mut seen_sides = std::collections::HashSet::new();
        for line in &entry.lines {
            AccountCode::new(line.account_number.as_str())?;

            let debit = parse_amount(&line.debit);
            let credit = parse_amount(&line.credit);

            if debit > BigDecimal::zero() && credit > BigDecimal::zero() {
                return Err(JournalError::Validation(format!(
                    "Line for account '{}' has both a debit and a credit",
                    line.account_number
                )));
            }

            let side = debit > BigDecimal::zero();
            if !seen_sides.insert((line.account_number.clone(), side)) {
                return Err(JournalError::Validation(format!(
                    "Account '{}' appears multiple times on the same side",
                    line.account_number
                )));
            }
        }

        Ok(())
    }
}
