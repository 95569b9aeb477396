//! Financial statement assembly example

use chrono::NaiveDate;
use journal_core::utils::MemoryBackend;
use journal_core::{StatementRole, StatementService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 Journal Core - Statement Assembly Example\n");

    // Seed a small chart with year-end balances
    let backend = MemoryBackend::new();
    let seed = [
        (StatementRole::Asset, "1000", "Cash", "24000"),
        (StatementRole::Asset, "1200", "Accounts Receivable", "6000"),
        (StatementRole::Asset, "1500", "Equipment", "18000"),
        (StatementRole::Liability, "2000", "Accounts Payable", "4000"),
        (StatementRole::Liability, "2500", "Mortgage Payable", "12000"),
        (StatementRole::Equity, "3000", "Owner's Equity", "32000"),
        (StatementRole::Revenue, "4000", "Sales Revenue", "50000"),
        (StatementRole::Expense, "4100", "Direct Materials", "21000"),
        (StatementRole::Expense, "5200", "Salaries Expense", "15000"),
        (StatementRole::Expense, "6100", "Interest Expense", "2000"),
    ];
    for (role, code, name, balance) in seed {
        backend.set_balance(role, code, name, balance)?;
    }

    let service = StatementService::new(backend);
    let as_of = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    // Balance sheet
    let sheet = service.balance_sheet(as_of).await?;
    println!("Balance Sheet as of {}\n", sheet.as_of_date);
    for section in [
        &sheet.current_assets,
        &sheet.noncurrent_assets,
        &sheet.current_liabilities,
        &sheet.noncurrent_liabilities,
        &sheet.equity,
    ] {
        println!("  {}", section.kind.heading());
        for account in &section.accounts {
            println!("    {} {:<24} {:>10}", account.code, account.name, account.balance);
        }
        println!("    {:<29} {:>10}\n", "Subtotal", section.subtotal);
    }
    println!("  Total Assets:      {:>10}", sheet.total_assets);
    println!("  Total Liabilities: {:>10}", sheet.total_liabilities);
    println!("  Total Equity:      {:>10}", sheet.total_equity);
    println!("  Balanced: {}\n", sheet.is_balanced);

    // Income statement
    let statement = service
        .income_statement(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), as_of)
        .await?;
    println!(
        "Income Statement {} to {}\n",
        statement.start_date, statement.end_date
    );
    println!("  Revenue:            {:>10}", statement.total_revenue);
    println!(
        "  Cost of Goods Sold: {:>10}",
        statement.cost_of_goods_sold.subtotal
    );
    println!("  Gross Profit:       {:>10}", statement.gross_profit);
    println!(
        "  Operating Expenses: {:>10}",
        statement.operating_expenses.subtotal
    );
    println!(
        "  Other Expenses:     {:>10}",
        statement.other_expenses.subtotal
    );
    println!("  Net Income:         {:>10}", statement.net_income);

    Ok(())
}
