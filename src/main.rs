use anyhow::Result;
use clap::{Parser, Subcommand};

use genz_finance::cli::{
    handle_dashboard_command, handle_export_command, handle_goals_command,
    handle_insight_command, handle_onboard_command, handle_profile_command,
    handle_transactions_command, DashboardArgs, ExportArgs, GoalsArgs, InsightArgs, OnboardArgs,
    TransactionsArgs,
};
use genz_finance::config::{paths::FinancePaths, settings::Settings};
use genz_finance::logging;
use genz_finance::storage::Storage;

#[derive(Parser)]
#[command(
    name = "genz",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance tracker for savings, spending and goals",
    long_about = "GenZ Finance shows how much of your income you keep, where the rest \
                  goes, and how close you are to your savings goals."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save your name and monthly income
    Onboard(OnboardArgs),

    /// Show the stored profile
    Profile,

    /// Monthly overview: income, expenses, savings and insight
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Transaction history grouped by day
    #[command(alias = "txn")]
    Transactions(TransactionsArgs),

    /// Savings goal progress
    Goals(GoalsArgs),

    /// Savings advice for a rate
    Insight(InsightArgs),

    /// Export data to a file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let level = if cli.verbose {
        "debug"
    } else {
        settings.log_level.as_str()
    };
    logging::init(level);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Onboard(args)) => {
            handle_onboard_command(&storage, args)?;
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
        }
        Some(Commands::Profile) => handle_profile_command(&storage)?,
        Some(Commands::Dashboard(args)) => handle_dashboard_command(&storage, &settings, args)?,
        Some(Commands::Transactions(args)) => {
            handle_transactions_command(&storage, &settings, args)?
        }
        Some(Commands::Goals(args)) => handle_goals_command(&storage, args)?,
        Some(Commands::Insight(args)) => handle_insight_command(&storage, args)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::Config) => {
            println!("GenZ Finance Configuration");
            println!("==========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Profile file:   {}", paths.profile_file().display());
            println!();
            println!("Settings:");
            println!("  Recent transactions: {}", settings.recent_transactions_limit);
            println!("  Day order:           {:?}", settings.bucket_order);
            println!("  Log level:           {}", settings.log_level);
        }
        None => {
            println!("GenZ Finance - savings, spending and goals");
            println!();
            println!("Run 'genz --help' for usage information.");
            if !paths.is_onboarded() {
                println!("Run 'genz onboard --name <NAME> --income <AMOUNT>' to get started.");
            }
        }
    }

    Ok(())
}
