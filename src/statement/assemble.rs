//! Statement assembly: partition a flat account-balance map into ordered,
//! subtotaled sections, then derive grand totals from the subtotals.
//!
//! Grand totals are always the sum of their section subtotals, never an
//! independent re-sum over the input, so a statement cannot drift out of
//! agreement with its own sections.

use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::statement::classify::{classify, SectionKind};
use crate::types::{AccountBalance, StatementRole};

/// An account balance tagged with the statement role the server assigned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedAccount {
    /// Statement role (asset, liability, equity, revenue, expense)
    pub role: StatementRole,
    /// The account and its balance
    pub account: AccountBalance,
}

impl ClassifiedAccount {
    /// Tag an account balance with its role
    pub fn new(role: StatementRole, account: AccountBalance) -> Self {
        Self { role, account }
    }

    /// Sub-section this account rolls up into
    pub fn section(&self) -> SectionKind {
        classify(self.role, &self.account.code)
    }
}

/// One section of a statement: its accounts in code order plus a subtotal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSection {
    /// Which sub-section this is
    pub kind: SectionKind,
    /// Accounts in the section, ordered numerically by code
    pub accounts: Vec<AccountBalance>,
    /// Sum of the account balances
    pub subtotal: BigDecimal,
}

impl StatementSection {
    /// Build a section from unordered accounts, sorting numerically by
    /// code so "900" sorts before "1000" regardless of padding
    pub fn build(kind: SectionKind, mut accounts: Vec<AccountBalance>) -> Self {
        accounts.sort_by_key(|account| account.code.numeric());
        let subtotal = accounts.iter().map(|account| &account.balance).sum();
        Self {
            kind,
            accounts,
            subtotal,
        }
    }

    /// An empty section of the given kind
    pub fn empty(kind: SectionKind) -> Self {
        Self {
            kind,
            accounts: Vec::new(),
            subtotal: BigDecimal::zero(),
        }
    }
}

/// Balance sheet assembled from classified account balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub as_of_date: NaiveDate,
    pub current_assets: StatementSection,
    pub noncurrent_assets: StatementSection,
    pub current_liabilities: StatementSection,
    pub noncurrent_liabilities: StatementSection,
    pub equity: StatementSection,
    /// Sum of the two asset subtotals
    pub total_assets: BigDecimal,
    /// Sum of the two liability subtotals
    pub total_liabilities: BigDecimal,
    /// Equity subtotal
    pub total_equity: BigDecimal,
    /// Whether assets equal liabilities plus equity
    pub is_balanced: bool,
}

/// Income statement assembled from classified account balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub revenue: StatementSection,
    pub cost_of_goods_sold: StatementSection,
    pub operating_expenses: StatementSection,
    pub other_expenses: StatementSection,
    /// Revenue subtotal
    pub total_revenue: BigDecimal,
    /// Revenue less cost of goods sold
    pub gross_profit: BigDecimal,
    /// Sum of all expense subtotals
    pub total_expenses: BigDecimal,
    /// Revenue less all expenses
    pub net_income: BigDecimal,
}

/// Split accounts into their sub-sections
fn partition(
    accounts: &HashMap<String, ClassifiedAccount>,
) -> HashMap<SectionKind, Vec<AccountBalance>> {
    let mut sections: HashMap<SectionKind, Vec<AccountBalance>> = HashMap::new();
    for classified in accounts.values() {
        sections
            .entry(classified.section())
            .or_default()
            .push(classified.account.clone());
    }
    sections
}

fn take_section(
    sections: &mut HashMap<SectionKind, Vec<AccountBalance>>,
    kind: SectionKind,
) -> StatementSection {
    match sections.remove(&kind) {
        Some(accounts) => StatementSection::build(kind, accounts),
        None => StatementSection::empty(kind),
    }
}

/// Assemble a balance sheet from a flat name-keyed balance map.
///
/// Revenue and expense accounts in the input are ignored here; they
/// belong to the income statement.
pub fn assemble_balance_sheet(
    accounts: &HashMap<String, ClassifiedAccount>,
    as_of_date: NaiveDate,
) -> BalanceSheet {
    let mut sections = partition(accounts);

    let current_assets = take_section(&mut sections, SectionKind::CurrentAsset);
    let noncurrent_assets = take_section(&mut sections, SectionKind::NoncurrentAsset);
    let current_liabilities = take_section(&mut sections, SectionKind::CurrentLiability);
    let noncurrent_liabilities = take_section(&mut sections, SectionKind::NoncurrentLiability);
    let equity = take_section(&mut sections, SectionKind::Equity);

    let total_assets = &current_assets.subtotal + &noncurrent_assets.subtotal;
    let total_liabilities = &current_liabilities.subtotal + &noncurrent_liabilities.subtotal;
    let total_equity = equity.subtotal.clone();
    let is_balanced = total_assets == &total_liabilities + &total_equity;

    BalanceSheet {
        as_of_date,
        current_assets,
        noncurrent_assets,
        current_liabilities,
        noncurrent_liabilities,
        equity,
        total_assets,
        total_liabilities,
        total_equity,
        is_balanced,
    }
}

/// Assemble an income statement for a reporting period
pub fn assemble_income_statement(
    accounts: &HashMap<String, ClassifiedAccount>,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> IncomeStatement {
    let mut sections = partition(accounts);

    let revenue = take_section(&mut sections, SectionKind::Revenue);
    let cost_of_goods_sold = take_section(&mut sections, SectionKind::CostOfGoodsSold);
    let operating_expenses = take_section(&mut sections, SectionKind::OperatingExpense);
    let other_expenses = take_section(&mut sections, SectionKind::OtherExpense);

    let total_revenue = revenue.subtotal.clone();
    let gross_profit = &total_revenue - &cost_of_goods_sold.subtotal;
    let total_expenses = &cost_of_goods_sold.subtotal
        + &operating_expenses.subtotal
        + &other_expenses.subtotal;
    let net_income = &total_revenue - &total_expenses;

    IncomeStatement {
        start_date,
        end_date,
        revenue,
        cost_of_goods_sold,
        operating_expenses,
        other_expenses,
        total_revenue,
        gross_profit,
        total_expenses,
        net_income,
    }
}
