mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::budget::{AllocateArgs, BudgetArgs, JarArgs, StudentArgs};
use commands::business::BusinessArgs;
use commands::goals::GoalArgs;
use commands::loans::{EmiArgs, OffersArgs};
use commands::savings::PpfArgs;
use commands::validation::{AgeArgs, SignupArgs};

/// Personal-finance calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "ww",
    version,
    about = "Personal-finance calculations with decimal precision",
    long_about = "A CLI for the WealthWaves calculation engine. Supports loan EMIs and \
                  amortization, bank offer ranking, goal SIP planning, budget allocation, \
                  business health, PPF projection, spending tracking, student savings and \
                  signup validation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Round decimal figures to this many places when printing
    #[arg(long, global = true)]
    decimals: Option<u32>,

    /// Engine policy file (YAML or JSON); built-in defaults otherwise
    #[arg(long, global = true)]
    policy: Option<String>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Loan EMI, totals and optional amortization schedule
    Emi(EmiArgs),
    /// Rank bank offers for a loan by EMI
    Offers(OffersArgs),
    /// Inflate a goal and compute the monthly SIP to reach it
    Goal(GoalArgs),
    /// Split monthly savings between safety net, debt and investments
    Allocate(AllocateArgs),
    /// Business P&L health metrics
    Business(BusinessArgs),
    /// Public Provident Fund year-by-year projection
    Ppf(PpfArgs),
    /// Track expense transactions against category budgets
    Budget(BudgetArgs),
    /// Deposit into or withdraw from the savings jar
    Jar(JarArgs),
    /// Student savings split and where to keep the savings
    Student(StudentArgs),
    /// Validate an onboarding signup form
    ValidateSignup(SignupArgs),
    /// Age from date of birth
    Age(AgeArgs),
    /// List supported signup countries
    Countries,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ww={default_level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let policy = match input::policy::load_policy(cli.policy.as_deref()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::loans::run_emi(args),
        Commands::Offers(args) => commands::loans::run_offers(args, &policy),
        Commands::Goal(args) => commands::goals::run_goal(args, &policy),
        Commands::Allocate(args) => commands::budget::run_allocate(args),
        Commands::Business(args) => commands::business::run_business(args),
        Commands::Ppf(args) => commands::savings::run_ppf(args, &policy),
        Commands::Budget(args) => commands::budget::run_budget(args),
        Commands::Jar(args) => commands::budget::run_jar(args),
        Commands::Student(args) => commands::budget::run_student(args),
        Commands::ValidateSignup(args) => commands::validation::run_validate_signup(args, &policy),
        Commands::Age(args) => commands::validation::run_age(args, &policy),
        Commands::Countries => commands::validation::run_countries(),
        Commands::Version => {
            println!("ww {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(mut value) => {
            if let Some(dp) = cli.decimals {
                debug!(decimals = dp, "rounding output");
                output::rounding::round_decimals(&mut value, dp);
            }
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
