use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendtrack::backup::BackupManager;
use spendtrack::config::{paths::TrackerPaths, settings::Settings};
use spendtrack::display;
use spendtrack::export::export_expenses_csv;
use spendtrack::models::{Expense, Money};
use spendtrack::reports;
use spendtrack::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendtrack",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "spendtrack records expense entries in a local JSON file and \
                  produces aggregate spending reports by category and by month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// Amount spent, e.g. 42.50
        amount: String,
        /// Category label, e.g. Food, Rent, Transport
        category: String,
        /// Description
        #[arg(default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all recorded expenses
    List,

    /// Show the total amount spent
    Total,

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all expenses as CSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Copy the expense file to the backup location
    Backup,

    /// Restore the expense file from the backup
    Restore,

    /// Show current configuration and paths
    Config,
}

#[derive(Subcommand)]
enum ReportCommands {
    /// Spending by category
    Category,
    /// Spending by month
    Month,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = ExpenseStore::new(paths.expenses_file());

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            description,
            date,
        }) => {
            let amount = Money::parse(&amount)?;
            settings.validate_amount(amount)?;

            let date = match date {
                Some(s) => Some(Expense::parse_date(&s)?),
                None => None,
            };

            let expense = Expense::new(amount, category, description, date);
            store.append(expense.clone())?;
            println!("Expense added: {}", expense);
        }
        Some(Commands::List) => {
            let expenses = store.load()?;
            print!("{}", display::format_expense_list(&expenses));
        }
        Some(Commands::Total) => {
            let expenses = store.load()?;
            println!("Total spent: {}", reports::total(&expenses));
        }
        Some(Commands::Report(ReportCommands::Category)) => {
            let expenses = store.load()?;
            print!("{}", display::format_category_report(&expenses));
        }
        Some(Commands::Report(ReportCommands::Month)) => {
            let expenses = store.load()?;
            print!("{}", display::format_month_report(&expenses));
        }
        Some(Commands::Export { output }) => {
            let expenses = store.load()?;
            match output {
                Some(path) => {
                    let file = File::create(&path)?;
                    let mut writer = BufWriter::new(file);
                    export_expenses_csv(&expenses, &mut writer)?;
                    println!("Exported {} expenses to {}", expenses.len(), path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    export_expenses_csv(&expenses, &mut writer)?;
                }
            }
        }
        Some(Commands::Backup) => {
            let manager = BackupManager::new(paths);
            let backup_path = manager.backup()?;
            println!("Backup written to {}", backup_path.display());
        }
        Some(Commands::Restore) => {
            let manager = BackupManager::new(paths);
            let store_path = manager.restore()?;
            println!("Expenses restored to {}", store_path.display());
        }
        Some(Commands::Config) => {
            println!("spendtrack Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Expense file:     {}", paths.expenses_file().display());
            println!("Backup file:      {}", paths.backup_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Allow negative amounts: {}", settings.allow_negative_amounts);
        }
        None => {
            println!("spendtrack - Terminal-based personal expense tracker");
            println!();
            println!("Run 'spendtrack --help' for usage information.");
        }
    }

    Ok(())
}
