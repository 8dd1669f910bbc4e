//! Integration tests for finsight-core
//!
//! These tests exercise the full aggregate → forecast → score → advise
//! workflow over realistic transaction histories.

use finsight_core::{
    advise, forecast, health_score, AccountKind, AccountRecord, AnalyticsEngine, Confidence,
    TransactionKind, TransactionRecord, Trend,
};

fn tx(kind: TransactionKind, amount: f64, category: &str, occurred_on: &str) -> TransactionRecord {
    TransactionRecord {
        kind,
        amount,
        category: category.to_string(),
        occurred_on: occurred_on.to_string(),
    }
}

fn account(balance: f64) -> AccountRecord {
    AccountRecord {
        name: "Checking".to_string(),
        kind: AccountKind::Checking,
        balance,
    }
}

/// A year of steady salary with slowly growing spending split across
/// groceries, rent, and dining
fn steady_year() -> Vec<TransactionRecord> {
    let mut txs = Vec::new();
    for month in 1..=12 {
        let date = |day: u8| format!("2025-{:02}-{:02}", month, day);
        txs.push(tx(TransactionKind::Income, 4000.0, "salary", &date(1)));
        txs.push(tx(TransactionKind::Expense, 1200.0, "rent", &date(3)));
        txs.push(tx(
            TransactionKind::Expense,
            400.0 + 10.0 * month as f64,
            "groceries",
            &date(12),
        ));
        txs.push(tx(TransactionKind::Expense, 150.0, "dining", &date(20)));
    }
    txs
}

#[test]
fn test_steady_year_end_to_end() {
    let txs = steady_year();
    let accounts = vec![account(8000.0)];

    let prediction = forecast(&txs).unwrap();
    // Spending grows by $10/month, well inside the stable band
    assert_eq!(prediction.trend, Trend::Stable);
    assert_eq!(prediction.confidence, Confidence::High);
    assert!(prediction.predicted_amount > 0.0);

    let score = health_score(&txs, &accounts);
    // Savings factor caps at 30 and activity adds 10, but the balance
    // covers less than half of the year's spending
    assert_eq!(score, 90);

    let tips = advise(&txs, &prediction);
    assert!((1..=4).contains(&tips.len()));
    // rent exceeds 30% of spending, so the concentration tip leads
    assert!(tips[0].contains("rent"), "got: {:?}", tips);
}

#[test]
fn test_spec_worked_examples() {
    // Six $100 expenses across six consecutive months, no income
    let txs: Vec<_> = (1..=6)
        .map(|m| {
            tx(
                TransactionKind::Expense,
                100.0,
                "misc",
                &format!("2025-{:02}-15", m),
            )
        })
        .collect();

    let p = forecast(&txs).unwrap();
    assert_eq!(p.historical_average, 100.0);
    assert_eq!(p.trend, Trend::Stable);
    assert_eq!(p.confidence, Confidence::High);
    assert_eq!(p.predicted_amount, 100.0);

    // income=$1000, expense=$200, 12 transactions, balances sum to $500
    let mut txs = vec![tx(TransactionKind::Income, 1000.0, "salary", "2025-01-01")];
    for i in 0..11 {
        txs.push(tx(
            TransactionKind::Expense,
            200.0 / 11.0,
            "misc",
            &format!("2025-01-{:02}", i + 2),
        ));
    }
    assert_eq!(health_score(&txs, &[account(500.0)]), 100);

    // "entertainment" at 50% of a $400 total expense
    let txs = vec![
        tx(TransactionKind::Expense, 200.0, "entertainment", "2025-01-05"),
        tx(TransactionKind::Expense, 120.0, "groceries", "2025-01-10"),
        tx(TransactionKind::Expense, 80.0, "transport", "2025-01-15"),
    ];
    let tips = advise(&txs, &forecast(&txs).unwrap());
    assert!(tips
        .iter()
        .any(|t| t.contains("entertainment") && t.contains("50%")));
}

#[test]
fn test_engine_matches_component_calls() {
    let txs = steady_year();
    let accounts = vec![account(8000.0)];

    let report = AnalyticsEngine::new().analyze(&txs, &accounts).unwrap();

    let prediction = forecast(&txs).unwrap();
    assert_eq!(report.prediction.trend, prediction.trend);
    assert_eq!(report.prediction.predicted_amount, prediction.predicted_amount);
    assert_eq!(report.score, health_score(&txs, &accounts));
    assert_eq!(report.tips, advise(&txs, &prediction));
}

#[test]
fn test_report_serializes_cleanly() {
    let report = AnalyticsEngine::new()
        .analyze(&steady_year(), &[account(8000.0)])
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["prediction"]["trend"], "stable");
    assert!(json["score"].is_u64());
    assert!(json["tips"].is_array());

    let round_tripped: finsight_core::InsightReport = serde_json::from_value(json).unwrap();
    assert_eq!(round_tripped.score, report.score);
}

#[test]
fn test_degenerate_and_error_paths() {
    // Two transactions: declared degenerate case
    let sparse = vec![
        tx(TransactionKind::Expense, 50.0, "misc", "2025-01-10"),
        tx(TransactionKind::Expense, 60.0, "misc", "2025-02-10"),
    ];
    let p = forecast(&sparse).unwrap();
    assert_eq!(p.trend, Trend::InsufficientData);

    // A corrupt date among otherwise valid records: hard error
    let corrupt = vec![
        tx(TransactionKind::Expense, 50.0, "misc", "2025-01-10"),
        tx(TransactionKind::Expense, 60.0, "misc", "2025-02-10"),
        tx(TransactionKind::Expense, 70.0, "misc", "not a date"),
    ];
    assert!(forecast(&corrupt).is_err());
    assert!(AnalyticsEngine::new().analyze(&corrupt, &[]).is_err());
}
