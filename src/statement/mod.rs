//! Account classification and financial statement assembly

pub mod assemble;
pub mod classify;
pub mod service;

pub use assemble::{
    assemble_balance_sheet, assemble_income_statement, BalanceSheet, ClassifiedAccount,
    IncomeStatement, StatementSection,
};
pub use classify::{classify, SectionKind, CURRENT_ASSET_LIMIT, CURRENT_LIABILITY_LIMIT};
pub use service::StatementService;
