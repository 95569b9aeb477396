//! Integration tests for journal-core

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use journal_core::{
    assemble_balance_sheet, assemble_income_statement, decode_balances,
    utils::{MemoryBackend, StrictEntryValidator},
    EntryForm, EntryKind, EntryStatus, JournalEntry, JournalLine, JournalManager, RequestGuard,
    StatementRole, StatementService,
};
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn seeded_backend() -> MemoryBackend {
    let backend = MemoryBackend::new();
    let seed = [
        (StatementRole::Asset, "1000", "Cash", "24000"),
        (StatementRole::Asset, "1200", "Accounts Receivable", "6000"),
        (StatementRole::Asset, "1499", "Prepaid Insurance", "1000"),
        (StatementRole::Asset, "1500", "Equipment", "18000"),
        (StatementRole::Liability, "2000", "Accounts Payable", "4000"),
        (StatementRole::Liability, "2499", "Accrued Wages", "1000"),
        (StatementRole::Liability, "2500", "Mortgage Payable", "12000"),
        (StatementRole::Equity, "3000", "Owner's Equity", "32000"),
        (StatementRole::Revenue, "4000", "Sales Revenue", "50000"),
        (StatementRole::Expense, "4100", "Direct Materials", "21000"),
        (StatementRole::Expense, "5200", "Salaries Expense", "15000"),
        (StatementRole::Expense, "6100", "Interest Expense", "2000"),
        (StatementRole::Expense, "7200", "Loss on Disposal", "500"),
    ];
    for (role, code, name, balance) in seed {
        backend.set_balance(role, code, name, balance).unwrap();
    }
    backend
}

#[tokio::test]
async fn entry_form_to_posted_entry() {
    let mut manager = JournalManager::new(MemoryBackend::new());

    // draft the entry in the form
    let mut form = EntryForm::new(
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        EntryKind::Standard,
    );
    form.description = "March office rent".to_string();
    form.set_account(0, "5200", "Salaries Expense");
    form.set_account(1, "1000", "Cash");
    form.set_debit(0, "4500");
    assert!(!form.can_submit());

    form.set_credit(1, "4500");
    assert!(form.can_submit());

    // persist as a draft entry and walk the lifecycle
    let mut entry = JournalEntry::new(form.entry_date, form.description.clone(), form.kind);
    for line in &form.lines {
        entry.add_line(line.clone());
    }
    manager.save_draft(&entry).await.unwrap();

    let submitted = manager.submit(entry.id).await.unwrap();
    assert_eq!(submitted.status, EntryStatus::PendingApproval);
    let approved = manager.approve(entry.id).await.unwrap();
    assert_eq!(approved.status, EntryStatus::Approved);
    let posted = manager.post(entry.id).await.unwrap();
    assert_eq!(posted.status, EntryStatus::Posted);

    let listed = manager
        .list_entries(
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            Some(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, EntryStatus::Posted);
}

#[tokio::test]
async fn strict_validator_blocks_submission() {
    let mut manager = JournalManager::with_validator(
        MemoryBackend::new(),
        Box::new(StrictEntryValidator),
    );

    let mut entry = JournalEntry::new(
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        "Two-sided line",
        EntryKind::Standard,
    );
    // balanced overall but one line carries both sides
    entry.add_line(JournalLine::new("1000", "Cash", "100", "40"));
    entry.add_line(JournalLine::new("4000", "Sales Revenue", "0", "60"));
    manager.save_draft(&entry).await.unwrap();

    assert!(manager.submit(entry.id).await.is_err());
}

#[tokio::test]
async fn statements_from_seeded_backend() {
    let service = StatementService::new(seeded_backend());
    let as_of = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    let sheet = service.balance_sheet(as_of).await.unwrap();
    assert_eq!(sheet.current_assets.subtotal, dec("31000"));
    assert_eq!(sheet.noncurrent_assets.subtotal, dec("18000"));
    assert_eq!(sheet.total_assets, dec("49000"));
    assert_eq!(sheet.current_liabilities.subtotal, dec("5000"));
    assert_eq!(sheet.noncurrent_liabilities.subtotal, dec("12000"));
    assert_eq!(sheet.total_liabilities, dec("17000"));
    assert_eq!(sheet.total_equity, dec("32000"));
    assert!(sheet.is_balanced);

    let statement = service
        .income_statement(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), as_of)
        .await
        .unwrap();
    assert_eq!(statement.total_revenue, dec("50000"));
    assert_eq!(statement.cost_of_goods_sold.subtotal, dec("21000"));
    assert_eq!(statement.gross_profit, dec("29000"));
    assert_eq!(statement.operating_expenses.subtotal, dec("15000"));
    assert_eq!(statement.other_expenses.subtotal, dec("2500"));
    assert_eq!(statement.net_income, dec("11500"));
}

#[test]
fn boundary_decode_feeds_statement_assembly() {
    let json = r#"{
        "Cash": {"number": "1000", "name": "Cash", "role": "Asset", "balance": 8000},
        "Warehouse": {"number": "1600", "name": "Warehouse", "role": "Asset", "balance": 40000},
        "Accounts Payable": {"number": "2000", "name": "Accounts Payable", "role": "Liability", "balance": 3000},
        "Bonds Payable": {"number": "2700", "name": "Bonds Payable", "role": "Liability", "balance": 20000},
        "Owner's Equity": {"number": "3000", "name": "Owner's Equity", "role": "Equity", "balance": 25000},
        "Dormant Reserve": {"number": "3900", "name": "Dormant Reserve", "role": "Equity"}
    }"#;

    let accounts = decode_balances(json).unwrap();
    // missing balance decodes as zero rather than failing the screen
    assert_eq!(accounts["Dormant Reserve"].account.balance, dec("0"));

    let sheet =
        assemble_balance_sheet(&accounts, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    assert_eq!(sheet.total_assets, dec("48000"));
    assert_eq!(sheet.total_liabilities, dec("23000"));
    assert_eq!(sheet.total_equity, dec("25000"));
    assert!(sheet.is_balanced);
}

#[test]
fn classification_thresholds_across_statements() {
    let json = r#"{
        "Prepaid Rent": {"number": "1499", "name": "Prepaid Rent", "role": "Asset", "balance": 100},
        "Land": {"number": "1500", "name": "Land", "role": "Asset", "balance": 100},
        "Wages Payable": {"number": "2499", "name": "Wages Payable", "role": "Liability", "balance": 100},
        "Notes Payable": {"number": "2500", "name": "Notes Payable", "role": "Liability", "balance": 100},
        "Freight In": {"number": "4100", "name": "Freight In", "role": "Expense", "balance": 100},
        "Marketing": {"number": "5200", "name": "Marketing", "role": "Expense", "balance": 100}
    }"#;
    let accounts = decode_balances(json).unwrap();

    let sheet = assemble_balance_sheet(&accounts, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(sheet.current_assets.accounts[0].name, "Prepaid Rent");
    assert_eq!(sheet.noncurrent_assets.accounts[0].name, "Land");
    assert_eq!(sheet.current_liabilities.accounts[0].name, "Wages Payable");
    assert_eq!(
        sheet.noncurrent_liabilities.accounts[0].name,
        "Notes Payable"
    );

    let statement = assemble_income_statement(
        &accounts,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    );
    assert_eq!(statement.cost_of_goods_sold.accounts[0].name, "Freight In");
    assert_eq!(statement.operating_expenses.accounts[0].name, "Marketing");
}

#[tokio::test]
async fn stale_fetch_is_dropped() {
    let guard = RequestGuard::new();
    let service = StatementService::new(seeded_backend());

    // first selection's fetch goes out
    let first = guard.begin();
    let first_result = service
        .balance_sheet(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
        .await
        .unwrap();

    // user switches selection before the first response lands
    let second = guard.begin();
    let second_result = service
        .balance_sheet(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
        .await
        .unwrap();

    let mut rendered = None;
    if guard.accept(second) {
        rendered = Some(second_result.as_of_date);
    }
    if guard.accept(first) {
        rendered = Some(first_result.as_of_date);
    }

    // the out-of-order first response never overwrites the newer state
    assert_eq!(
        rendered,
        Some(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
    );
}
