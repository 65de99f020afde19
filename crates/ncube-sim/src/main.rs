use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    combine::{self, CombineArgs},
    complexes::{self, ComplexesArgs},
    low_weight::{self, LowWeightArgs},
    one_weight::{self, OneWeightArgs},
    pipeline::{self, PipelineArgs},
    symmetries::{self, SymmetriesArgs},
};

mod commands;

/// Exit status for failures other than the `combine` file checks, which own
/// statuses 1 and 2.
const GENERAL_FAILURE: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "ncube-sim", about = "Hyperplane slicing experiments on the n-cube")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the symmetry group of the cube.
    Symmetries(SymmetriesArgs),
    /// Enumerate cut complexes, one per symmetry orbit.
    Complexes(ComplexesArgs),
    /// Maximal sets of one-weight halfspaces and their cover count.
    OneWeight(OneWeightArgs),
    /// Maximal sets of low-weight halfspaces and their cover count.
    LowWeight(LowWeightArgs),
    /// Run the four-hyperplane pipeline.
    Pipeline(PipelineArgs),
    /// Run the coverage query over persisted collections.
    Combine(CombineArgs),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let result: Result<ExitCode, Box<dyn Error>> = match cli.command {
        Command::Symmetries(args) => symmetries::run(&args),
        Command::Complexes(args) => complexes::run(&args),
        Command::OneWeight(args) => one_weight::run(&args),
        Command::LowWeight(args) => low_weight::run(&args),
        Command::Pipeline(args) => pipeline::run(&args),
        Command::Combine(args) => combine::run(&args),
    };
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(GENERAL_FAILURE)
        }
    }
}
