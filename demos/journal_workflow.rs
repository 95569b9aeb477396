//! Journal entry form and approval workflow example

use chrono::NaiveDate;
use journal_core::utils::MemoryBackend;
use journal_core::{EntryForm, EntryKind, JournalEntry, JournalManager};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Journal Core - Entry Workflow Example\n");

    // 1. Draft an entry in the form
    println!("✏️  Drafting a journal entry...");
    let mut form = EntryForm::new(
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        EntryKind::Standard,
    );
    form.description = "March office rent".to_string();
    form.set_account(0, "6000", "Rent Expense");
    form.set_account(1, "1000", "Cash");
    form.set_debit(0, "1200");

    let check = form.balance_check();
    println!(
        "  Debits: {}  Credits: {}  Balanced: {}",
        check.total_debits, check.total_credits, check.is_balanced
    );
    if let Some(message) = form.difference_message() {
        println!("  ⚠️  {}", message);
    }

    // 2. Complete the credit side and watch submit become available
    form.set_credit(1, "1200");
    println!("\n  After entering the credit side:");
    println!("  Can submit: {}\n", form.can_submit());

    // 3. Walk the entry through the approval lifecycle
    println!("📋 Walking the approval lifecycle...");
    let mut manager = JournalManager::new(MemoryBackend::new());

    let mut entry = JournalEntry::new(form.entry_date, form.description.clone(), form.kind);
    for line in &form.lines {
        entry.add_line(line.clone());
    }
    manager.save_draft(&entry).await?;
    println!("  ✓ Saved draft {}", entry.id);

    let submitted = manager.submit(entry.id).await?;
    println!("  ✓ Submitted ({})", submitted.status);

    let approved = manager.approve(entry.id).await?;
    println!("  ✓ Approved ({})", approved.status);

    let posted = manager.post(entry.id).await?;
    println!("  ✓ Posted ({})", posted.status);

    // 4. Illegal transitions are rejected
    match manager.approve(entry.id).await {
        Err(err) => println!("\n  ✗ Re-approving a posted entry fails: {}", err),
        Ok(_) => unreachable!(),
    }

    println!("\n🎉 Workflow complete!");
    Ok(())
}
