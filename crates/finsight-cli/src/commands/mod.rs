//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};

use finsight_core::{
    AccountRecord, AnalyticsEngine, ConfidenceModel, Forecaster, TransactionRecord,
};
use finsight_server::ServerConfig;

/// Start the REST API server
pub async fn cmd_serve(
    host: &str,
    port: u16,
    no_auth: bool,
    origins: Vec<String>,
    api_keys: Vec<String>,
) -> Result<()> {
    let config = ServerConfig {
        require_auth: !no_auth,
        allowed_origins: origins,
        api_keys,
    };

    finsight_server::serve(host, port, config).await
}

/// Run the analytics engine over local JSON record files and print the
/// resulting report
pub fn cmd_analyze(
    transactions: &Path,
    accounts: Option<&Path>,
    fit_confidence: bool,
    json: bool,
) -> Result<()> {
    let transactions: Vec<TransactionRecord> = read_records(transactions)?;
    let accounts: Vec<AccountRecord> = match accounts {
        Some(path) => read_records(path)?,
        None => vec![],
    };

    tracing::debug!(
        transactions = transactions.len(),
        accounts = accounts.len(),
        "Loaded record files"
    );

    let engine = if fit_confidence {
        AnalyticsEngine::with_forecaster(Forecaster::with_confidence_model(
            ConfidenceModel::FitQuality,
        ))
    } else {
        AnalyticsEngine::new()
    };

    let report = engine
        .analyze(&transactions, &accounts)
        .context("Analysis failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Financial health score: {}/100", report.score);
    println!();
    println!("Next month forecast:");
    println!("  predicted:  {:.2}", report.prediction.predicted_amount);
    println!("  average:    {:.2}", report.prediction.historical_average);
    println!("  trend:      {}", report.prediction.trend);
    println!("  confidence: {}", report.prediction.confidence);
    println!();
    println!("Tips:");
    for tip in &report.tips {
        println!("  - {}", tip);
    }

    Ok(())
}

fn read_records<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Invalid JSON in {}", path.display()))
}
