use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use ncube_core::EdgeLexicon;
use ncube_slice::{
    combine_sliceable_sets, compute_one_weight_mss, write_one_weight_halfspaces_to_file, write_sets,
};

use super::ConfigArgs;

#[derive(Args, Debug)]
pub struct OneWeightArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    /// Thresholds, comma separated; overrides the configuration.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub thresholds: Option<Vec<i32>>,
    /// Write the sorted halfspace text dump here.
    #[arg(long)]
    pub dump: Option<PathBuf>,
    /// Write the maximal sets as binary records here.
    #[arg(long)]
    pub sets: Option<PathBuf>,
}

pub fn run(args: &OneWeightArgs) -> Result<ExitCode, Box<dyn Error>> {
    let mut config = args.config.resolve()?;
    if let Some(thresholds) = &args.thresholds {
        config.thresholds = thresholds.clone();
        config.validate()?;
    }
    let lexicon = EdgeLexicon::new(config.cube()?);
    if let Some(path) = &args.dump {
        write_one_weight_halfspaces_to_file(&config.thresholds, &lexicon, path)?;
    }
    let mss = compute_one_weight_mss(&config.thresholds, &lexicon);
    println!("one-weight maximal sets: {}", mss.len());
    if let Some(path) = &args.sets {
        write_sets(path, &mss)?;
    }
    match combine_sliceable_sets(&mss, &lexicon, config.max_rounds) {
        Some(k) => println!("{k} one-weight halfspaces slice the {}-cube", config.dimension),
        None => println!("no cover within {} rounds", config.max_rounds),
    }
    Ok(ExitCode::SUCCESS)
}
