//! CLI commands for reports
//!
//! Dashboard, transaction list, goals and the savings insight.

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use super::{create_output_file, resolve_date};
use crate::aggregator::{
    classify_savings_insight, compute_income_expense_summary, BucketOrder, TransactionFilter,
    TransactionQuery,
};
use crate::config::Settings;
use crate::display::format_goal_details;
use crate::error::{FinanceError, FinanceResult};
use crate::reports::{DashboardReport, GoalsReport, TransactionsReport};
use crate::services::ProfileService;
use crate::storage::Storage;

/// Arguments for `genz dashboard`
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Date to report as of (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for `genz transactions`
#[derive(Args, Debug)]
pub struct TransactionsArgs {
    /// Show all, income or expense transactions
    #[arg(short, long, default_value = "all")]
    pub filter: TransactionFilter,

    /// Only names containing this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Put the most recent day first regardless of ledger order
    #[arg(long)]
    pub newest_first: bool,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `genz goals`
#[derive(Args, Debug)]
pub struct GoalsArgs {
    /// Date to count remaining days from (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub today: Option<String>,

    /// Show details for a single goal
    #[arg(short, long)]
    pub goal: Option<String>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `genz insight`
#[derive(Args, Debug)]
pub struct InsightArgs {
    /// Savings rate in percent; defaults to the rate from your profile
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<f64>,
}

/// Handle `genz dashboard`
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    args: DashboardArgs,
) -> FinanceResult<()> {
    let today = resolve_date(args.today.as_deref())?;
    let report = DashboardReport::generate(storage, settings, today)?;
    println!("{}", report.format_terminal());
    Ok(())
}

/// Handle `genz transactions`
pub fn handle_transactions_command(
    storage: &Storage,
    settings: &Settings,
    args: TransactionsArgs,
) -> FinanceResult<()> {
    let order = if args.newest_first {
        BucketOrder::NewestFirst
    } else {
        settings.bucket_order
    };
    let query = TransactionQuery::new(args.filter, args.search).with_order(order);
    debug!(filter = %query.filter, search = %query.search, ?order, "listing transactions");

    let report = TransactionsReport::generate(storage, &query)?;

    if let Some(path) = args.output {
        let mut writer = create_output_file(&path)?;
        report.export_csv(&mut writer)?;
        info!(path = %path.display(), "transactions exported");
        println!(
            "Exported {} transactions to: {}",
            report.transaction_count(),
            path.display()
        );
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle `genz goals`
pub fn handle_goals_command(storage: &Storage, args: GoalsArgs) -> FinanceResult<()> {
    let today = resolve_date(args.today.as_deref())?;
    let report = GoalsReport::generate(storage, today)?;

    if let Some(name) = args.goal {
        let goal = report
            .goals
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| FinanceError::goal_not_found(&name))?;
        println!("{}", format_goal_details(goal));
        return Ok(());
    }

    if let Some(path) = args.output {
        let mut writer = create_output_file(&path)?;
        report.export_csv(&mut writer)?;
        info!(path = %path.display(), "goals exported");
        println!("Goals report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

/// Handle `genz insight`
pub fn handle_insight_command(storage: &Storage, args: InsightArgs) -> FinanceResult<()> {
    let rate = match args.rate {
        Some(rate) => rate,
        None => {
            let profile = ProfileService::new(storage).load()?;
            compute_income_expense_summary(profile.monthly_income, &storage.data.expenses)
                .savings_rate
        }
    };

    let insight = classify_savings_insight(rate);

    println!("Savings rate: {:.1}%", insight.savings_rate);
    println!("{} ({})", insight.title, insight.tier);
    println!("{}", insight.message);

    Ok(())
}
