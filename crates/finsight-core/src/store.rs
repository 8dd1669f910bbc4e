//! Data-access capability for host layers
//!
//! The analytics engine performs no I/O of its own. Hosts implement this
//! trait over whatever backend they use and inject it where user records
//! need to be fetched or generated reports persisted.

use async_trait::async_trait;

use crate::analytics::InsightReport;
use crate::error::Result;
use crate::models::{AccountRecord, TransactionRecord};

/// Capability for fetching one user's financial records and persisting
/// generated insight reports.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// All transaction snapshots for a user
    async fn fetch_transactions(&self, user_id: &str) -> Result<Vec<TransactionRecord>>;

    /// All account snapshots for a user
    async fn fetch_accounts(&self, user_id: &str) -> Result<Vec<AccountRecord>>;

    /// Users known to the store, for scheduled sweeps
    async fn list_users(&self) -> Result<Vec<String>>;

    /// Persist the latest report for a user, replacing any previous one
    async fn save_report(&self, user_id: &str, report: &InsightReport) -> Result<()>;

    /// Most recently persisted report for a user, if any
    async fn load_report(&self, user_id: &str) -> Result<Option<InsightReport>>;
}
