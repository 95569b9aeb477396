//! Double-entry balance validation for in-progress journal entries.
//!
//! Debit and credit amounts arrive as the strings typed into the entry
//! form. Parsing is deliberately lenient: anything that does not parse
//! contributes zero, so a half-edited form never panics or errors, it is
//! simply not balanced yet.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::JournalLine;

/// Outcome of checking an entry's debit/credit totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceCheck {
    /// Sum of all parsed debit amounts
    pub total_debits: BigDecimal,
    /// Sum of all parsed credit amounts
    pub total_credits: BigDecimal,
    /// Absolute difference between the totals
    pub difference: BigDecimal,
    /// True when debits equal credits exactly and are positive
    pub is_balanced: bool,
}

impl BalanceCheck {
    /// The out-of-balance amount formatted for the inline message,
    /// e.g. "$0.01"
    pub fn display_difference(&self) -> String {
        format!(
            "${}",
            self.difference.with_scale_round(2, RoundingMode::HalfUp)
        )
    }
}

/// Parse a form-edited amount string into a decimal.
///
/// Empty, whitespace-only, or unparseable input yields zero. A leading
/// dollar sign and thousands separators are tolerated since users paste
/// formatted amounts into the form.
pub fn parse_amount(raw: &str) -> BigDecimal {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return BigDecimal::zero();
    }

    BigDecimal::from_str(&cleaned).unwrap_or_else(|_| BigDecimal::zero())
}

/// Compute debit/credit totals over the entry's lines.
///
/// An entry is balanced when the totals match exactly and are positive;
/// an empty or all-zero entry is never balanced.
pub fn check_balance(lines: &[JournalLine]) -> BalanceCheck {
    let total_debits: BigDecimal = lines.iter().map(|line| parse_amount(&line.debit)).sum();
    let total_credits: BigDecimal = lines.iter().map(|line| parse_amount(&line.credit)).sum();

    let difference = (&total_debits - &total_credits).abs();
    let is_balanced = total_debits == total_credits && total_debits > BigDecimal::zero();

    BalanceCheck {
        total_debits,
        total_credits,
        difference,
        is_balanced,
    }
}
