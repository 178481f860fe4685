pub mod assign;
pub mod check;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kringle")]
#[command(about = "A secret santa matchmaker.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less (-q hides headers and pairings, -qq leaves only problems)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw new pairings and save them as CSV
    #[command(alias = "a")]
    Assign {
        /// CSV file containing the employee list
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// CSV file containing previous year's assignments
        #[arg(short, long, value_name = "FILE")]
        constraint: Option<PathBuf>,

        /// CSV file to save the new assignments to
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Seed for the candidate shuffle, for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate an employee list without drawing
    #[command(alias = "c")]
    Check {
        /// CSV file containing the employee list
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
