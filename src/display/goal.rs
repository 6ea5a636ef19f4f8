//! Goal display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::{format_bar, format_percentage};
use crate::aggregator::{GoalProgress, GoalStatus};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Days Left")]
    days_left: i64,
    #[tabled(rename = "To Go")]
    to_go: String,
}

fn status_suffix(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::InProgress => "",
        GoalStatus::Reached => " ✓",
        GoalStatus::Overachieved => " ★",
    }
}

/// Format goal progress as a table
pub fn format_goal_table(goals: &[GoalProgress]) -> String {
    if goals.is_empty() {
        return "No savings goals yet.\n".to_string();
    }

    let rows = goals.iter().map(|goal| GoalRow {
        name: format!("{}{}", goal.name, status_suffix(goal.status)),
        category: goal.category.clone(),
        saved: format!("{} / {}", goal.current, goal.target),
        progress: format!(
            "{} {:>4}",
            format_bar(goal.progress_percent, 100.0, 12),
            format_percentage(goal.progress_percent)
        ),
        days_left: goal.days_remaining,
        to_go: goal.remaining_amount.to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(4..), Alignment::right());
    format!("{}\n", table)
}

/// Format details for a single goal
pub fn format_goal_details(goal: &GoalProgress) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal:        {}\n", goal.name));
    output.push_str(&format!("Category:    {}\n", goal.category));
    output.push_str(&format!("Saved:       {} of {}\n", goal.current, goal.target));
    output.push_str(&format!(
        "Progress:    {} {}\n",
        format_bar(goal.progress_percent, 100.0, 20),
        format_percentage(goal.progress_percent)
    ));
    output.push_str(&format!("Deadline:    {}\n", goal.deadline.format("%Y-%m-%d")));
    output.push_str(&format!("Days left:   {}\n", goal.days_remaining));
    output.push_str(&format!("To go:       {}\n", goal.remaining_amount));

    output
}
