//! Transaction display formatting
//!
//! Register rows and the date-sectioned transaction list.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::aggregator::DateGroup;
use crate::models::{Transaction, TransactionType};

/// Shown when no transaction survives the filter
pub const NO_TRANSACTIONS: &str = "No transactions found";

fn direction_icon(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "↗",
        TransactionType::Expense => "↙",
    }
}

/// Format a single transaction for display (compact row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{} {:<22} {:<14} {:>10}",
        direction_icon(txn.kind),
        truncate(&txn.name, 22),
        truncate(&txn.category, 14),
        txn.signed_display()
    )
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    let rows = transactions.iter().map(|txn| TransactionRow {
        icon: direction_icon(txn.kind),
        name: txn.name.clone(),
        category: txn.category.clone(),
        amount: txn.signed_display(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());
    table.to_string()
}

/// Format date sections, each headed by its long date label
pub fn format_date_groups(groups: &[DateGroup]) -> String {
    if groups.is_empty() {
        return format!("{}\n", NO_TRANSACTIONS);
    }

    let mut output = String::new();
    for group in groups {
        output.push_str(&group.label().to_uppercase());
        output.push('\n');
        output.push_str(&format_transaction_table(&group.transactions));
        output.push_str("\n\n");
    }
    output
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn coffee() -> Transaction {
        Transaction::new(
            1,
            "Coffee Shop",
            Money::from_cents(-850),
            "Food",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            TransactionType::Expense,
        )
    }

    #[test]
    fn test_format_transaction_row() {
        let row = format_transaction_row(&coffee());
        assert!(row.starts_with("↙ Coffee Shop"));
        assert!(row.ends_with("-$8.50"));
    }

    #[test]
    fn test_format_transaction_table() {
        let table = format_transaction_table(&[coffee()]);
        assert!(table.contains("Coffee Shop"));
        assert!(table.contains("Food"));
        assert!(table.contains("-$8.50"));
    }

    #[test]
    fn test_format_date_groups() {
        let groups = vec![DateGroup {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            transactions: vec![coffee()],
        }];
        let output = format_date_groups(&groups);
        assert!(output.starts_with("FRIDAY, MARCH 15, 2024\n"));
        assert!(output.contains("Coffee Shop"));
    }

    #[test]
    fn test_empty_groups_show_no_data_state() {
        assert_eq!(format_date_groups(&[]), "No transactions found\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Netflix Subscription", 10), "Netflix...");
        assert_eq!(truncate("Food", 10), "Food");
        assert_eq!(truncate("Food", 2), "..");
    }
}
