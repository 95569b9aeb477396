//! In-memory backend implementation for testing and development

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::journal::status::EntryStatus;
use crate::statement::assemble::ClassifiedAccount;
use crate::traits::{BalanceSource, JournalStore};
use crate::types::{
    AccountBalance, AccountCode, JournalEntry, JournalError, JournalResult, StatementRole,
};

/// In-memory balance source and journal store
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    balances: Arc<RwLock<HashMap<String, ClassifiedAccount>>>,
    entries: Arc<RwLock<HashMap<Uuid, JournalEntry>>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace an account balance, keyed by account name
    pub fn set_balance(
        &self,
        role: StatementRole,
        code: &str,
        name: &str,
        balance: &str,
    ) -> JournalResult<()> {
        let code = AccountCode::new(code)?;
        let balance = BigDecimal::from_str(balance)
            .map_err(|e| JournalError::Validation(format!("invalid balance '{balance}': {e}")))?;
        self.balances.write().unwrap().insert(
            name.to_string(),
            ClassifiedAccount::new(role, AccountBalance::new(code, name, balance)),
        );
        Ok(())
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.balances.write().unwrap().clear();
        self.entries.write().unwrap().clear();
    }
}

#[async_trait]
impl BalanceSource for MemoryBackend {
    async fn fetch_balances(
        &self,
        _as_of_date: Option<NaiveDate>,
    ) -> JournalResult<HashMap<String, ClassifiedAccount>> {
        // snapshot semantics: the seeded balances are the balances
        Ok(self.balances.read().unwrap().clone())
    }
}

#[async_trait]
impl JournalStore for MemoryBackend {
    async fn save_entry(&mut self, entry: &JournalEntry) -> JournalResult<()> {
        self.entries
            .write()
            .unwrap()
            .insert(entry.id, entry.clone());
        Ok(())
    }

    async fn get_entry(&self, entry_id: Uuid) -> JournalResult<Option<JournalEntry>> {
        Ok(self.entries.read().unwrap().get(&entry_id).cloned())
    }

    async fn list_entries(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> JournalResult<Vec<JournalEntry>> {
        let entries = self.entries.read().unwrap();
        let mut filtered: Vec<JournalEntry> = entries
            .values()
            .filter(|entry| {
                if let Some(start) = start_date {
                    if entry.entry_date < start {
                        return false;
                    }
                }
                if let Some(end) = end_date {
                    if entry.entry_date > end {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();
        filtered.sort_by_key(|entry| (entry.entry_date, entry.created_at));
        Ok(filtered)
    }

    async fn set_status(&mut self, entry_id: Uuid, status: EntryStatus) -> JournalResult<()> {
        let mut entries = self.entries.write().unwrap();
        match entries.get_mut(&entry_id) {
            Some(entry) => {
                entry.status = status;
                entry.updated_at = chrono::Utc::now().naive_utc();
                Ok(())
            }
            None => Err(JournalError::EntryNotFound(entry_id.to_string())),
        }
    }
}
