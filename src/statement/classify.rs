//! Account classification by chart-of-accounts code.
//!
//! The chart follows the usual numbering convention: assets in the
//! 1000s, liabilities in the 2000s, equity in the 3000s, revenue and
//! expenses above. Within assets and liabilities a numeric threshold
//! splits current from noncurrent; within expenses the leading digit
//! picks the statement bucket.

use serde::{Deserialize, Serialize};

use crate::types::{AccountCode, StatementRole};

/// Asset codes below this are current assets
pub const CURRENT_ASSET_LIMIT: u64 = 1500;
/// Liability codes below this are current liabilities
pub const CURRENT_LIABILITY_LIMIT: u64 = 2500;

/// Statement sub-section an account rolls up into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    /// Assets expected to be realized within one year
    CurrentAsset,
    /// Long-lived assets (property, equipment, intangibles)
    NoncurrentAsset,
    /// Obligations due within one year
    CurrentLiability,
    /// Long-term obligations
    NoncurrentLiability,
    /// Owner's equity
    Equity,
    /// Revenue accounts
    Revenue,
    /// Direct cost of goods or services sold
    CostOfGoodsSold,
    /// Operating expenses
    OperatingExpense,
    /// Other, non-operating expenses
    OtherExpense,
}

impl SectionKind {
    /// Heading used when rendering the section
    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::CurrentAsset => "Current Assets",
            SectionKind::NoncurrentAsset => "Noncurrent Assets",
            SectionKind::CurrentLiability => "Current Liabilities",
            SectionKind::NoncurrentLiability => "Noncurrent Liabilities",
            SectionKind::Equity => "Equity",
            SectionKind::Revenue => "Revenue",
            SectionKind::CostOfGoodsSold => "Cost of Goods Sold",
            SectionKind::OperatingExpense => "Operating Expenses",
            SectionKind::OtherExpense => "Other Expenses",
        }
    }
}

/// Map an account to its statement sub-section.
///
/// Pure function of the role and code; malformed codes cannot reach
/// here because [`AccountCode`] validates at construction.
pub fn classify(role: StatementRole, code: &AccountCode) -> SectionKind {
    match role {
        StatementRole::Asset => {
            if code.numeric() < CURRENT_ASSET_LIMIT {
                SectionKind::CurrentAsset
            } else {
                SectionKind::NoncurrentAsset
            }
        }
        StatementRole::Liability => {
            if code.numeric() < CURRENT_LIABILITY_LIMIT {
                SectionKind::CurrentLiability
            } else {
                SectionKind::NoncurrentLiability
            }
        }
        StatementRole::Equity => SectionKind::Equity,
        StatementRole::Revenue => SectionKind::Revenue,
        StatementRole::Expense => match code.leading_digit() {
            4 => SectionKind::CostOfGoodsSold,
            5 => SectionKind::OperatingExpense,
            // 6xxx and 7xxx are the observed other-expense ranges; any
            // stray expense code lands in the same conservative bucket
            _ => SectionKind::OtherExpense,
        },
    }
}
