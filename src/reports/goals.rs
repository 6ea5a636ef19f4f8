//! Goals Report
//!
//! Progress of every savings goal plus the combined totals.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregator::{
    compute_aggregate_goal_stats, compute_all_goal_progress, goal_chart_series, GoalProgress,
    GoalSlice, GoalStats,
};
use crate::display::{format_bar, format_goal_table, format_percentage};
use crate::error::{FinanceError, FinanceResult};
use crate::storage::Storage;

/// Goals Report
#[derive(Debug, Clone, Serialize)]
pub struct GoalsReport {
    pub as_of: NaiveDate,
    pub goals: Vec<GoalProgress>,
    pub stats: GoalStats,
    /// Progress share per goal, in goal order
    pub chart: Vec<GoalSlice>,
}

impl GoalsReport {
    /// Generate the report with days counted from `today`
    pub fn generate(storage: &Storage, today: NaiveDate) -> FinanceResult<Self> {
        let goals = &storage.data.goals;

        Ok(Self {
            as_of: today,
            goals: compute_all_goal_progress(goals, today)?,
            stats: compute_aggregate_goal_stats(goals),
            chart: goal_chart_series(goals)?,
        })
    }

    /// Combined progress across all goals (0 when nothing is targeted)
    pub fn overall_percent(&self) -> f64 {
        if !self.stats.total_target.is_positive() {
            return 0.0;
        }
        self.stats.total_saved.as_f64() / self.stats.total_target.as_f64() * 100.0
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Savings Goals as of {}\n", self.as_of));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!("Total Target: {}\n", self.stats.total_target));
        output.push_str(&format!(
            "Total Saved:  {} ({})\n",
            self.stats.total_saved,
            format_percentage(self.overall_percent())
        ));
        output.push_str(&format!("Active Goals: {}\n\n", self.stats.goal_count));

        output.push_str(&format_goal_table(&self.goals));

        if !self.chart.is_empty() {
            output.push_str("\nPROGRESS\n");
            for slice in &self.chart {
                output.push_str(&format!(
                    "{:<20} {} {:>4}\n",
                    slice.name,
                    format_bar(slice.percentage, 100.0, 30),
                    format_percentage(slice.percentage)
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record([
                "Goal",
                "Category",
                "Target",
                "Current",
                "Progress",
                "Deadline",
                "Days Remaining",
                "Remaining Amount",
            ])
            .map_err(|e| FinanceError::Export(e.to_string()))?;

        for goal in &self.goals {
            csv_writer
                .write_record([
                    goal.name.clone(),
                    goal.category.clone(),
                    format!("{:.2}", goal.target.as_f64()),
                    format!("{:.2}", goal.current.as_f64()),
                    format!("{:.2}", goal.progress_percent),
                    goal.deadline.format("%Y-%m-%d").to_string(),
                    goal.days_remaining.to_string(),
                    format!("{:.2}", goal.remaining_amount.as_f64()),
                ])
                .map_err(|e| FinanceError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| FinanceError::Export(e.to_string()))?;

        Ok(())
    }
}
