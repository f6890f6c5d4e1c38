//! ESIOrder CLI - Command-line interface
//!
//! This binary provides a command-line interface to the esiorder library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::status::StatusArgs;
use commands::submit::SubmitArgs;
use commands::{status, submit};

#[derive(Parser)]
#[command(name = "esiorder")]
#[command(version = esiorder::VERSION)]
#[command(about = "Submit and track ESI subsetting orders", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile an options document and submit the order
    Submit(SubmitArgs),
    /// Poll the status of one or more orders
    Status(StatusArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Submit(args) => submit::run(args),
        Command::Status(args) => status::run(args),
    };

    if let Err(e) = result {
        e.exit();
    }
}
