//! Calendar-month aggregation of expense activity

use std::collections::BTreeMap;
use std::fmt;

use chrono::Datelike;

use crate::error::{Error, Result};
use crate::models::{TransactionKind, TransactionRecord};

/// A calendar month key.
///
/// Orders chronologically via the derived `(year, month)` ordering and
/// displays as zero-padded `YYYY-MM`, so lexicographic and chronological
/// order coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Parse a calendar date string (`YYYY-MM-DD` or bare `YYYY-MM`) into
    /// its month key.
    pub fn parse(date: &str) -> Result<Self> {
        if let Ok(d) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            return Ok(Self {
                year: d.year(),
                month: d.month(),
            });
        }

        // Some upstream exports carry bare year-month stamps
        let invalid = || Error::InvalidData(format!("unparseable transaction date: {}", date));
        let (y, m) = date.split_once('-').ok_or_else(invalid)?;
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Sum expense-kind transactions into per-month buckets, ascending by month.
///
/// Months with no expense activity are absent from the map rather than
/// present as explicit zeros; downstream regression sees only the surviving
/// buckets. An unparseable date or a non-finite amount is a data error, not
/// a skip: a silently dropped month would corrupt trend inference.
pub fn monthly_expense_totals(
    transactions: &[TransactionRecord],
) -> Result<BTreeMap<MonthKey, f64>> {
    let mut buckets = BTreeMap::new();

    for tx in transactions {
        if tx.kind != TransactionKind::Expense {
            continue;
        }
        if !tx.amount.is_finite() {
            return Err(Error::InvalidData(format!(
                "non-numeric amount for transaction dated {}",
                tx.occurred_on
            )));
        }
        let key = MonthKey::parse(&tx.occurred_on)?;
        *buckets.entry(key).or_insert(0.0) += tx.amount;
    }

    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: f64, occurred_on: &str) -> TransactionRecord {
        TransactionRecord {
            kind: TransactionKind::Expense,
            amount,
            category: "misc".to_string(),
            occurred_on: occurred_on.to_string(),
        }
    }

    #[test]
    fn test_month_key_parse_full_date() {
        let key = MonthKey::parse("2025-03-17").unwrap();
        assert_eq!(key, MonthKey { year: 2025, month: 3 });
    }

    #[test]
    fn test_month_key_parse_year_month() {
        let key = MonthKey::parse("2025-11").unwrap();
        assert_eq!(key, MonthKey { year: 2025, month: 11 });
    }

    #[test]
    fn test_month_key_rejects_garbage() {
        assert!(MonthKey::parse("not-a-date").is_err());
        assert!(MonthKey::parse("2025-13").is_err());
        assert!(MonthKey::parse("2025").is_err());
    }

    #[test]
    fn test_month_key_display_zero_pads() {
        let key = MonthKey { year: 2025, month: 4 };
        assert_eq!(key.to_string(), "2025-04");
    }

    #[test]
    fn test_buckets_sum_per_month_and_sort() {
        let txs = vec![
            expense(30.0, "2025-02-10"),
            expense(10.0, "2025-01-05"),
            expense(20.0, "2025-01-20"),
        ];

        let buckets = monthly_expense_totals(&txs).unwrap();
        let entries: Vec<_> = buckets.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(*entries[0].0, MonthKey { year: 2025, month: 1 });
        assert_eq!(*entries[0].1, 30.0);
        assert_eq!(*entries[1].0, MonthKey { year: 2025, month: 2 });
        assert_eq!(*entries[1].1, 30.0);
    }

    #[test]
    fn test_non_expense_kinds_are_filtered() {
        let txs = vec![
            TransactionRecord {
                kind: TransactionKind::Income,
                amount: 1000.0,
                category: "salary".to_string(),
                occurred_on: "2025-01-01".to_string(),
            },
            TransactionRecord {
                kind: TransactionKind::Transfer,
                amount: 500.0,
                category: "internal".to_string(),
                occurred_on: "2025-01-02".to_string(),
            },
        ];

        assert!(monthly_expense_totals(&txs).unwrap().is_empty());
    }

    #[test]
    fn test_inactive_months_stay_absent() {
        // January and April only; February and March must not appear as zeros
        let txs = vec![expense(10.0, "2025-01-15"), expense(10.0, "2025-04-15")];

        let buckets = monthly_expense_totals(&txs).unwrap();
        assert_eq!(buckets.len(), 2);
        assert!(!buckets.contains_key(&MonthKey { year: 2025, month: 2 }));
        assert!(!buckets.contains_key(&MonthKey { year: 2025, month: 3 }));
    }

    #[test]
    fn test_bad_date_is_an_error_not_a_skip() {
        let txs = vec![expense(10.0, "2025-01-15"), expense(10.0, "someday")];
        assert!(monthly_expense_totals(&txs).is_err());
    }

    #[test]
    fn test_nan_amount_is_an_error() {
        let txs = vec![expense(f64::NAN, "2025-01-15")];
        assert!(monthly_expense_totals(&txs).is_err());
    }
}
