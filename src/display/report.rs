//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the dashboard, transaction and goal
//! reports.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::aggregator::ExpenseSlice;
use crate::models::MonthlySavingsPoint;

/// Format a percentage the way progress labels show it ("75%")
pub fn format_percentage(pct: f64) -> String {
    format!("{:.0}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 || !value.is_finite() {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line centered within `width`
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Expense breakdown as a table with one bar per category
pub fn format_expense_breakdown(slices: &[ExpenseSlice]) -> String {
    if slices.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = slices.iter().map(|slice| BreakdownRow {
        category: slice.category.clone(),
        amount: slice.amount.to_string(),
        share: format_percentage(slice.percent),
        bar: format_bar(slice.percent, 100.0, 20),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..3), Alignment::right());
    format!("{}\n", table)
}

/// Monthly savings series as horizontal bars scaled to the best month
pub fn format_savings_series(points: &[MonthlySavingsPoint]) -> String {
    let max = points
        .iter()
        .map(|p| p.savings.as_f64())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for point in points {
        output.push_str(&format!(
            "{:<4} {} {:>10}\n",
            point.month,
            format_bar(point.savings.as_f64(), max, 30),
            point.savings
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(75.0), "75%");
        assert_eq!(format_percentage(53.33), "53%");
        assert_eq!(format_percentage(100.0), "100%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
        assert_eq!(format_bar(10.0, 0.0, 3), "░░░");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("Hi", 6), "  Hi");
        assert_eq!(format_header("Too long", 4), "Too long");
    }

    #[test]
    fn test_expense_breakdown_table() {
        let slices = vec![
            ExpenseSlice {
                category: "Food".into(),
                amount: Money::from_whole(450),
                percent: 60.0,
            },
            ExpenseSlice {
                category: "Bills".into(),
                amount: Money::from_whole(300),
                percent: 40.0,
            },
        ];
        let output = format_expense_breakdown(&slices);
        assert!(output.contains("Food"));
        assert!(output.contains("$450.00"));
        assert!(output.contains("60%"));
        assert_eq!(format_expense_breakdown(&[]), "No expenses recorded.\n");
    }

    #[test]
    fn test_savings_series() {
        let points = vec![
            MonthlySavingsPoint::new("Jan", Money::from_whole(1200)),
            MonthlySavingsPoint::new("Feb", Money::from_whole(1500)),
        ];
        let output = format_savings_series(&points);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Jan"));
        assert!(lines[1].contains(&"█".repeat(30)));
    }
}
