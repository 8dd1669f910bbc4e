//! Financial health score
//!
//! Additive 0-100 rubric: a base of 50 adjusted by savings rate,
//! transaction activity, and balance coverage of recent expenses.

use crate::models::{AccountRecord, TransactionKind, TransactionRecord};

/// Starting point before any factor is applied
const BASE_SCORE: f64 = 50.0;

/// Upper bound on the savings-rate contribution
const SAVINGS_FACTOR_CAP: f64 = 30.0;

/// Score a user's financial health in [0, 100].
///
/// The savings factor is `min(30, savings_rate * 75)` and may be negative
/// when spending exceeds income; only the final clamp floors the result.
/// Activity and coverage factors are mutually exclusive tiers, not
/// additive. With no transaction history there is nothing to rate and the
/// base score is returned unconditionally.
pub fn health_score(transactions: &[TransactionRecord], accounts: &[AccountRecord]) -> u8 {
    if transactions.is_empty() {
        return BASE_SCORE as u8;
    }

    let income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expense: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();

    let savings = if income > 0.0 {
        let rate = (income - expense) / income;
        (rate * 75.0).min(SAVINGS_FACTOR_CAP)
    } else {
        0.0
    };

    let activity = if transactions.len() > 10 {
        10.0
    } else if transactions.len() > 5 {
        5.0
    } else {
        0.0
    };

    let total_balance: f64 = accounts.iter().map(|a| a.balance).sum();
    let coverage = if total_balance > expense {
        10.0
    } else if total_balance > 0.5 * expense {
        5.0
    } else {
        0.0
    };

    (BASE_SCORE + savings + activity + coverage).clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountKind;

    fn tx(kind: TransactionKind, amount: f64) -> TransactionRecord {
        TransactionRecord {
            kind,
            amount,
            category: "misc".to_string(),
            occurred_on: "2025-01-15".to_string(),
        }
    }

    fn account(balance: f64) -> AccountRecord {
        AccountRecord {
            name: "Main".to_string(),
            kind: AccountKind::Checking,
            balance,
        }
    }

    #[test]
    fn test_empty_history_returns_base() {
        assert_eq!(health_score(&[], &[account(10_000.0)]), 50);
    }

    #[test]
    fn test_perfect_score_example() {
        // income 1000, expense 200, 12 transactions, balances sum to 500:
        // savings min(30, 0.8*75) = 30, activity +10, coverage 500 > 200 = +10
        let mut txs = vec![tx(TransactionKind::Income, 1000.0)];
        for _ in 0..11 {
            txs.push(tx(TransactionKind::Expense, 200.0 / 11.0));
        }
        assert_eq!(txs.len(), 12);

        let score = health_score(&txs, &[account(500.0)]);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_overspending_drags_score_below_base() {
        // rate = (100 - 400) / 100 = -3 -> savings factor -225, clamped to 0
        let txs = vec![
            tx(TransactionKind::Income, 100.0),
            tx(TransactionKind::Expense, 400.0),
        ];
        assert_eq!(health_score(&txs, &[]), 0);
    }

    #[test]
    fn test_mild_deficit_lands_between_bounds() {
        // rate = -0.2 -> savings factor -15; no activity or coverage tiers
        let txs = vec![
            tx(TransactionKind::Income, 100.0),
            tx(TransactionKind::Expense, 120.0),
        ];
        assert_eq!(health_score(&txs, &[]), 35);
    }

    #[test]
    fn test_activity_tiers_are_exclusive() {
        // 6 transfers: no income or expense, activity tier +5 only
        let txs: Vec<_> = (0..6).map(|_| tx(TransactionKind::Transfer, 1.0)).collect();
        assert_eq!(health_score(&txs, &[]), 55);

        let txs: Vec<_> = (0..11).map(|_| tx(TransactionKind::Transfer, 1.0)).collect();
        assert_eq!(health_score(&txs, &[]), 60);
    }

    #[test]
    fn test_partial_coverage_tier() {
        // balance 150 covers more than half of the 200 expense: +5
        let txs = vec![
            tx(TransactionKind::Income, 200.0),
            tx(TransactionKind::Expense, 200.0),
        ];
        // savings rate 0 -> +0
        assert_eq!(health_score(&txs, &[account(150.0)]), 55);
    }

    #[test]
    fn test_score_is_always_bounded() {
        let txs = vec![
            tx(TransactionKind::Income, 1_000_000.0),
            tx(TransactionKind::Expense, 1.0),
        ];
        let score = health_score(&txs, &[account(f64::MAX)]);
        assert!(score <= 100);

        let txs = vec![
            tx(TransactionKind::Income, 1.0),
            tx(TransactionKind::Expense, 1_000_000.0),
        ];
        let score = health_score(&txs, &[account(-1_000_000.0)]);
        assert_eq!(score, 0);
    }
}
