//! In-memory ProfileStore implementation
//!
//! Backs the REST host and the test suite. Durable persistence belongs to
//! an external collaborator behind the same `ProfileStore` trait; nothing
//! in the handlers or scheduler depends on this particular implementation.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finsight_core::{
    AccountRecord, Error, InsightReport, ProfileStore, Result, TransactionRecord,
};

/// A stored account: the core record plus host-side identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAccount {
    pub id: i64,
    pub user_id: String,
    #[serde(flatten)]
    pub record: AccountRecord,
    pub created_at: DateTime<Utc>,
}

/// A stored transaction: the core record plus host-side identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub id: i64,
    pub user_id: String,
    #[serde(flatten)]
    pub record: TransactionRecord,
    pub created_at: DateTime<Utc>,
}

/// Partial update for an account
#[derive(Debug, Default, Deserialize)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub kind: Option<finsight_core::AccountKind>,
    pub balance: Option<f64>,
}

/// Partial update for a transaction
#[derive(Debug, Default, Deserialize)]
pub struct TransactionUpdate {
    pub kind: Option<finsight_core::TransactionKind>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub occurred_on: Option<String>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    accounts: Vec<StoredAccount>,
    transactions: Vec<StoredTransaction>,
    reports: HashMap<String, InsightReport>,
}

/// Thread-safe in-memory store, shared across handlers via `Arc`
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| Error::Store("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| Error::Store("store lock poisoned".to_string()))
    }

    // ----- accounts -----

    pub fn insert_account(&self, user_id: &str, record: AccountRecord) -> Result<StoredAccount> {
        let mut inner = self.write()?;
        inner.next_id += 1;
        let account = StoredAccount {
            id: inner.next_id,
            user_id: user_id.to_string(),
            record,
            created_at: Utc::now(),
        };
        inner.accounts.push(account.clone());
        Ok(account)
    }

    pub fn list_accounts(&self, user_id: &str) -> Result<Vec<StoredAccount>> {
        Ok(self
            .read()?
            .accounts
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    pub fn get_account(&self, user_id: &str, id: i64) -> Result<Option<StoredAccount>> {
        Ok(self
            .read()?
            .accounts
            .iter()
            .find(|a| a.user_id == user_id && a.id == id)
            .cloned())
    }

    pub fn update_account(
        &self,
        user_id: &str,
        id: i64,
        update: AccountUpdate,
    ) -> Result<StoredAccount> {
        let mut inner = self.write()?;
        let account = inner
            .accounts
            .iter_mut()
            .find(|a| a.user_id == user_id && a.id == id)
            .ok_or_else(|| Error::NotFound(format!("account {}", id)))?;

        if let Some(name) = update.name {
            account.record.name = name;
        }
        if let Some(kind) = update.kind {
            account.record.kind = kind;
        }
        if let Some(balance) = update.balance {
            account.record.balance = balance;
        }
        Ok(account.clone())
    }

    pub fn delete_account(&self, user_id: &str, id: i64) -> Result<()> {
        let mut inner = self.write()?;
        let before = inner.accounts.len();
        inner
            .accounts
            .retain(|a| !(a.user_id == user_id && a.id == id));
        if inner.accounts.len() == before {
            return Err(Error::NotFound(format!("account {}", id)));
        }
        Ok(())
    }

    // ----- transactions -----

    pub fn insert_transaction(
        &self,
        user_id: &str,
        record: TransactionRecord,
    ) -> Result<StoredTransaction> {
        let mut inner = self.write()?;
        inner.next_id += 1;
        let tx = StoredTransaction {
            id: inner.next_id,
            user_id: user_id.to_string(),
            record,
            created_at: Utc::now(),
        };
        inner.transactions.push(tx.clone());
        Ok(tx)
    }

    pub fn list_transactions(&self, user_id: &str) -> Result<Vec<StoredTransaction>> {
        Ok(self
            .read()?
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    pub fn get_transaction(&self, user_id: &str, id: i64) -> Result<Option<StoredTransaction>> {
        Ok(self
            .read()?
            .transactions
            .iter()
            .find(|t| t.user_id == user_id && t.id == id)
            .cloned())
    }

    pub fn update_transaction(
        &self,
        user_id: &str,
        id: i64,
        update: TransactionUpdate,
    ) -> Result<StoredTransaction> {
        let mut inner = self.write()?;
        let tx = inner
            .transactions
            .iter_mut()
            .find(|t| t.user_id == user_id && t.id == id)
            .ok_or_else(|| Error::NotFound(format!("transaction {}", id)))?;

        if let Some(kind) = update.kind {
            tx.record.kind = kind;
        }
        if let Some(amount) = update.amount {
            tx.record.amount = amount;
        }
        if let Some(category) = update.category {
            tx.record.category = category;
        }
        if let Some(occurred_on) = update.occurred_on {
            tx.record.occurred_on = occurred_on;
        }
        Ok(tx.clone())
    }

    pub fn delete_transaction(&self, user_id: &str, id: i64) -> Result<()> {
        let mut inner = self.write()?;
        let before = inner.transactions.len();
        inner
            .transactions
            .retain(|t| !(t.user_id == user_id && t.id == id));
        if inner.transactions.len() == before {
            return Err(Error::NotFound(format!("transaction {}", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn fetch_transactions(&self, user_id: &str) -> Result<Vec<TransactionRecord>> {
        Ok(self
            .read()?
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .map(|t| t.record.clone())
            .collect())
    }

    async fn fetch_accounts(&self, user_id: &str) -> Result<Vec<AccountRecord>> {
        Ok(self
            .read()?
            .accounts
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| a.record.clone())
            .collect())
    }

    async fn list_users(&self) -> Result<Vec<String>> {
        let inner = self.read()?;
        let mut users: Vec<String> = inner
            .accounts
            .iter()
            .map(|a| a.user_id.clone())
            .chain(inner.transactions.iter().map(|t| t.user_id.clone()))
            .collect();
        users.sort();
        users.dedup();
        Ok(users)
    }

    async fn save_report(&self, user_id: &str, report: &InsightReport) -> Result<()> {
        self.write()?
            .reports
            .insert(user_id.to_string(), report.clone());
        Ok(())
    }

    async fn load_report(&self, user_id: &str) -> Result<Option<InsightReport>> {
        Ok(self.read()?.reports.get(user_id).cloned())
    }
}
