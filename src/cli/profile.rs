//! CLI commands for the user profile

use clap::Args;

use crate::error::FinanceResult;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Arguments for `genz onboard`
#[derive(Args, Debug)]
pub struct OnboardArgs {
    /// Your name
    #[arg(short, long)]
    pub name: String,

    /// Monthly income (e.g. 3500 or 3,500.00)
    #[arg(short, long, allow_hyphen_values = true)]
    pub income: String,
}

/// Handle `genz onboard`
pub fn handle_onboard_command(storage: &Storage, args: OnboardArgs) -> FinanceResult<()> {
    let profile = ProfileService::new(storage).onboard(&args.name, &args.income)?;

    println!("Welcome, {}!", profile.name);
    println!("Monthly income set to {}", profile.monthly_income);
    println!();
    println!("Run 'genz dashboard' to see your overview.");

    Ok(())
}

/// Handle `genz profile`
pub fn handle_profile_command(storage: &Storage) -> FinanceResult<()> {
    let profile = ProfileService::new(storage).load()?;

    println!("Name:           {}", profile.name);
    println!("Monthly income: {}", profile.monthly_income);
    if !storage.paths().is_onboarded() {
        println!();
        println!("Not set up yet. Run 'genz onboard --name <NAME> --income <AMOUNT>'.");
    }

    Ok(())
}
