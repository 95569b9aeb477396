//! Statement generation over a [`BalanceSource`] backend

use chrono::NaiveDate;

use crate::statement::assemble::{
    assemble_balance_sheet, assemble_income_statement, BalanceSheet, IncomeStatement,
};
use crate::traits::BalanceSource;
use crate::types::JournalResult;

/// Fetches balances and assembles statements from them
pub struct StatementService<S: BalanceSource> {
    source: S,
}

impl<S: BalanceSource> StatementService<S> {
    /// Create a service over the given balance source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate a balance sheet as of a specific date
    pub async fn balance_sheet(&self, as_of_date: NaiveDate) -> JournalResult<BalanceSheet> {
        let accounts = self.source.fetch_balances(Some(as_of_date)).await?;
        Ok(assemble_balance_sheet(&accounts, as_of_date))
    }

    /// Generate an income statement for a date range
    pub async fn income_statement(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> JournalResult<IncomeStatement> {
        let accounts = self.source.fetch_balances(Some(end_date)).await?;
        Ok(assemble_income_statement(&accounts, start_date, end_date))
    }
}
