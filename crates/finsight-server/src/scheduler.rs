//! Background insight refresh scheduler
//!
//! Optionally re-runs the analytics engine for every known user on a fixed
//! interval and persists the resulting reports through the store. Enabled
//! via environment variable:
//!
//! - `FINSIGHT_REFRESH_MINUTES`: interval in minutes (e.g. "60" for hourly)
//!
//! Unset or zero disables scheduled refreshes. The engine itself never
//! schedules anything; this module owns the cadence.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;
use tracing::{info, warn};

use finsight_core::{AnalyticsEngine, ProfileStore};

/// Environment variable holding the refresh interval in minutes
const REFRESH_ENV: &str = "FINSIGHT_REFRESH_MINUTES";

/// Configuration for scheduled insight refreshes
#[derive(Debug, Clone)]
pub struct RefreshScheduleConfig {
    /// Interval between refresh sweeps in minutes
    pub interval_minutes: u64,
}

impl RefreshScheduleConfig {
    /// Parse configuration from environment variables.
    ///
    /// Returns None if scheduling is not configured.
    pub fn from_env() -> Option<Self> {
        let interval_minutes: u64 = std::env::var(REFRESH_ENV).ok().and_then(|s| s.parse().ok())?;

        if interval_minutes == 0 {
            warn!("{} is 0, scheduled refreshes disabled", REFRESH_ENV);
            return None;
        }

        Some(Self { interval_minutes })
    }
}

/// Start the refresh scheduler as a background task.
///
/// Spawns a tokio task that runs indefinitely, refreshing every user's
/// insight report at the configured interval.
pub fn start_refresh_scheduler(store: Arc<dyn ProfileStore>, config: RefreshScheduleConfig) {
    info!(
        "Starting insight refresh scheduler: every {} minutes",
        config.interval_minutes
    );

    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(config.interval_minutes * 60));

        // Skip the immediate first tick - no sweep on startup
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match run_refresh_sweep(store.as_ref()).await {
                Ok(count) => {
                    info!(users = count, "Scheduled insight refresh complete");
                }
                Err(e) => {
                    warn!(error = %e, "Scheduled insight refresh failed");
                }
            }
        }
    });
}

/// Refresh the insight report for every known user.
///
/// A failure for one user is logged and does not abort the sweep; the
/// returned count covers users whose reports were actually refreshed.
pub async fn run_refresh_sweep(store: &dyn ProfileStore) -> finsight_core::Result<usize> {
    let engine = AnalyticsEngine::new();
    let users = store.list_users().await?;
    let mut refreshed = 0;

    for user_id in &users {
        match refresh_user(store, &engine, user_id).await {
            Ok(()) => refreshed += 1,
            Err(e) => {
                warn!(user = %user_id, error = %e, "Failed to refresh insights");
            }
        }
    }

    Ok(refreshed)
}

async fn refresh_user(
    store: &dyn ProfileStore,
    engine: &AnalyticsEngine,
    user_id: &str,
) -> finsight_core::Result<()> {
    let transactions = store.fetch_transactions(user_id).await?;
    let accounts = store.fetch_accounts(user_id).await?;
    let report = engine.analyze(&transactions, &accounts)?;
    store.save_report(user_id, &report).await
}
