pub mod commands;
pub mod logging;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "bidmatch",
    about = "RFP bid matching and pricing CLI",
    long_about = "Match RFP requirements against an uploaded product catalog, price the winning products, and assemble bid totals.",
    after_help = "Examples:\n  bidmatch evaluate --requirement rfp.json --catalog catalog.json --test-costs tests.json --required-test \"High Voltage (HV) Test\"\n  bidmatch bid --request bid.json --catalog catalog.json --test-costs tests.json --json\n  bidmatch config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Match a single requirement against the catalog and price it")]
    Evaluate(commands::evaluate::EvaluateArgs),
    #[command(about = "Price a multi-material bid request and combine line totals")]
    Bid(commands::bid::BidArgs),
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Evaluate(args) => commands::evaluate::run(&args),
        Command::Bid(args) => commands::bid::run(&args),
        Command::Config => commands::CommandResult::rendered(commands::config::run()),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
