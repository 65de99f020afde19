use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use ncube_core::EdgeLexicon;
use ncube_slice::{
    combine_sliceable_sets, compute_low_weight_mss, write_low_weight_halfspaces_to_file, write_sets,
};

use super::ConfigArgs;

#[derive(Args, Debug)]
pub struct LowWeightArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    /// Largest absolute normal entry; overrides the configuration.
    #[arg(long)]
    pub max: Option<i32>,
    /// Write the sorted halfspace text dump here.
    #[arg(long)]
    pub dump: Option<PathBuf>,
    /// Write the maximal sets as binary records here.
    #[arg(long)]
    pub sets: Option<PathBuf>,
}

pub fn run(args: &LowWeightArgs) -> Result<ExitCode, Box<dyn Error>> {
    let mut config = args.config.resolve()?;
    if let Some(max) = args.max {
        config.max_weight = max;
        config.validate()?;
    }
    let lexicon = EdgeLexicon::new(config.cube()?);
    if let Some(path) = &args.dump {
        write_low_weight_halfspaces_to_file(config.max_weight, &lexicon, path)?;
    }
    let mss = compute_low_weight_mss(config.max_weight, &lexicon);
    println!("low-weight maximal sets (max {}): {}", config.max_weight, mss.len());
    if let Some(path) = &args.sets {
        write_sets(path, &mss)?;
    }
    match combine_sliceable_sets(&mss, &lexicon, config.max_rounds) {
        Some(k) => println!("{k} low-weight halfspaces slice the {}-cube", config.dimension),
        None => println!("no cover within {} rounds", config.max_rounds),
    }
    Ok(ExitCode::SUCCESS)
}
