//! Filtering and date-bucketing for the transaction list
//!
//! Filtering happens first, then the surviving transactions are partitioned
//! by calendar day. A bucket keeps its transactions in input order. Buckets
//! come out in the order their date was first seen unless the caller asks for
//! newest-first, so callers relying on `FirstSeen` must pass a ledger that is
//! already sorted newest-first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::models::{Transaction, TransactionType};

/// Which transaction types the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    pub fn accepts(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" | "expenses" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown filter '{}'. Use all, income or expense",
                other
            )),
        }
    }
}

/// Order of the date buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketOrder {
    /// Order in which each date first appears in the input
    #[default]
    FirstSeen,
    /// Latest date first, regardless of input order
    NewestFirst,
}

/// Caller-owned list state: active filter, search text and bucket order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionQuery {
    pub filter: TransactionFilter,
    pub search: String,
    pub order: BucketOrder,
}

impl TransactionQuery {
    pub fn new(filter: TransactionFilter, search: impl Into<String>) -> Self {
        Self {
            filter,
            search: search.into(),
            order: BucketOrder::default(),
        }
    }

    pub fn with_order(mut self, order: BucketOrder) -> Self {
        self.order = order;
        self
    }
}

fn name_contains(name: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || name.to_lowercase().contains(needle_lower)
}

/// Transactions sharing one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
}

impl DateGroup {
    /// Section header, e.g. "Friday, March 15, 2024"
    pub fn label(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

/// Transactions that pass the query, in input order
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    query: &TransactionQuery,
) -> Vec<&'a Transaction> {
    let needle = query.search.to_lowercase();
    transactions
        .iter()
        .filter(|txn| query.filter.accepts(txn.kind) && name_contains(&txn.name, &needle))
        .collect()
}

/// Filter, then bucket by date. An empty result means nothing matched.
pub fn group_transactions_by_date(
    transactions: &[Transaction],
    query: &TransactionQuery,
) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut index_by_date: HashMap<NaiveDate, usize> = HashMap::new();

    for txn in filter_transactions(transactions, query) {
        match index_by_date.get(&txn.date) {
            Some(&idx) => groups[idx].transactions.push(txn.clone()),
            None => {
                index_by_date.insert(txn.date, groups.len());
                groups.push(DateGroup {
                    date: txn.date,
                    transactions: vec![txn.clone()],
                });
            }
        }
    }

    if query.order == BucketOrder::NewestFirst {
        groups.sort_by(|a, b| b.date.cmp(&a.date));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: u64, name: &str, cents: i64, day: u32) -> Transaction {
        Transaction::new(
            id,
            name,
            Money::from_cents(cents),
            "Misc",
            date(2024, 3, day),
            TransactionType::Expense,
        )
    }

    fn income(id: u64, name: &str, cents: i64, day: u32) -> Transaction {
        Transaction::new(
            id,
            name,
            Money::from_cents(cents),
            "Income",
            date(2024, 3, day),
            TransactionType::Income,
        )
    }

    /// The four transactions shown on the dashboard
    fn dashboard_sample() -> Vec<Transaction> {
        vec![
            expense(1, "Coffee Shop", -850, 15),
            income(2, "Freelance Work", 50_000, 14),
            expense(3, "Uber Ride", -1500, 14),
            expense(4, "Grocery Shopping", -8550, 13),
        ]
    }

    fn ids(group: &DateGroup) -> Vec<u64> {
        group.transactions.iter().map(|t| t.id.value()).collect()
    }

    #[test]
    fn test_income_filter_on_dashboard_sample() {
        let query = TransactionQuery::new(TransactionFilter::Income, "");
        let groups = group_transactions_by_date(&dashboard_sample(), &query);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].date, date(2024, 3, 14));
        assert_eq!(groups[0].transactions.len(), 1);
        assert_eq!(groups[0].transactions[0].name, "Freelance Work");
    }

    #[test]
    fn test_all_filter_groups_by_day_in_first_seen_order() {
        let groups = group_transactions_by_date(&dashboard_sample(), &TransactionQuery::default());

        let dates: Vec<_> = groups.iter().map(|g| g.date).collect();
        assert_eq!(dates, vec![date(2024, 3, 15), date(2024, 3, 14), date(2024, 3, 13)]);
        assert_eq!(ids(&groups[1]), vec![2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let query = TransactionQuery::new(TransactionFilter::All, "SHOP");
        let groups = group_transactions_by_date(&dashboard_sample(), &query);

        let names: Vec<_> = groups
            .iter()
            .flat_map(|g| g.transactions.iter().map(|t| t.name.as_str()))
            .collect();
        assert_eq!(names, vec!["Coffee Shop", "Grocery Shopping"]);
    }

    #[test]
    fn test_filter_and_search_combine() {
        let query = TransactionQuery::new(TransactionFilter::Expense, "work");
        assert!(group_transactions_by_date(&dashboard_sample(), &query).is_empty());

        let query = TransactionQuery::new(TransactionFilter::Income, "work");
        assert_eq!(group_transactions_by_date(&dashboard_sample(), &query).len(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let query = TransactionQuery::new(TransactionFilter::All, "zzz");
        assert!(group_transactions_by_date(&dashboard_sample(), &query).is_empty());
        assert!(group_transactions_by_date(&[], &TransactionQuery::default()).is_empty());
    }

    #[test]
    fn test_buckets_partition_the_filtered_set() {
        let txns = vec![
            expense(1, "A", -100, 10),
            income(2, "B", 200, 12),
            expense(3, "C", -300, 10),
            expense(4, "D", -400, 11),
            income(5, "E", 500, 12),
            expense(6, "F", -600, 10),
        ];

        for filter in [
            TransactionFilter::All,
            TransactionFilter::Income,
            TransactionFilter::Expense,
        ] {
            let query = TransactionQuery::new(filter, "");
            let groups = group_transactions_by_date(&txns, &query);

            let mut grouped: Vec<TransactionId> = groups
                .iter()
                .flat_map(|g| g.transactions.iter().map(|t| t.id))
                .collect();
            grouped.sort();

            let mut expected: Vec<TransactionId> =
                filter_transactions(&txns, &query).iter().map(|t| t.id).collect();
            expected.sort();

            assert_eq!(grouped, expected);
            for group in &groups {
                assert!(group.transactions.iter().all(|t| t.date == group.date));
            }
        }
    }

    #[test]
    fn test_bucket_contents_keep_input_order() {
        let txns = vec![
            expense(1, "A", -100, 10),
            expense(2, "B", -100, 11),
            expense(3, "C", -100, 10),
            expense(4, "D", -100, 10),
        ];
        let groups = group_transactions_by_date(&txns, &TransactionQuery::default());

        assert_eq!(groups[0].date, date(2024, 3, 10));
        assert_eq!(ids(&groups[0]), vec![1, 3, 4]);
        assert_eq!(ids(&groups[1]), vec![2]);
    }

    #[test]
    fn test_newest_first_sorts_buckets_only() {
        let txns = vec![
            expense(1, "A", -100, 10),
            expense(2, "B", -100, 12),
            expense(3, "C", -100, 10),
            expense(4, "D", -100, 11),
        ];
        let query = TransactionQuery::default().with_order(BucketOrder::NewestFirst);
        let groups = group_transactions_by_date(&txns, &query);

        let dates: Vec<_> = groups.iter().map(|g| g.date).collect();
        assert_eq!(dates, vec![date(2024, 3, 12), date(2024, 3, 11), date(2024, 3, 10)]);
        assert_eq!(ids(&groups[2]), vec![1, 3]);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let query = TransactionQuery::new(TransactionFilter::Expense, "");
        let first = group_transactions_by_date(&dashboard_sample(), &query);
        let second = group_transactions_by_date(&dashboard_sample(), &query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_transactions_keeps_matches() {
        let query = TransactionQuery::new(TransactionFilter::Income, "free");
        let sample = dashboard_sample();
        let matched = filter_transactions(&sample, &query);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, sample[1].id);
    }

    #[test]
    fn test_group_label() {
        let group = DateGroup {
            date: date(2024, 3, 15),
            transactions: vec![],
        };
        assert_eq!(group.label(), "Friday, March 15, 2024");

        let group = DateGroup {
            date: date(2024, 3, 7),
            transactions: vec![],
        };
        assert_eq!(group.label(), "Thursday, March 7, 2024");
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("Income".parse::<TransactionFilter>().unwrap(), TransactionFilter::Income);
        assert_eq!("expense".parse::<TransactionFilter>().unwrap(), TransactionFilter::Expense);
        assert_eq!("all".parse::<TransactionFilter>().unwrap(), TransactionFilter::All);
        assert!("transfers".parse::<TransactionFilter>().is_err());
    }

    #[test]
    fn test_bucket_order_serde() {
        assert_eq!(serde_json::to_string(&BucketOrder::NewestFirst).unwrap(), "\"newest-first\"");
        let order: BucketOrder = serde_json::from_str("\"first-seen\"").unwrap();
        assert_eq!(order, BucketOrder::FirstSeen);
    }
}
