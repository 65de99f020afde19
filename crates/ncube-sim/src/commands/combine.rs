use std::error::Error;
use std::process::ExitCode;

use clap::Args;
use log::info;
use ncube_slice::{combine_persisted, CombineOutcome};

use super::ConfigArgs;

#[derive(Args, Debug)]
pub struct CombineArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Exit status 1 when the representative file is missing, empty or rejected,
/// 2 for the maximal-set file.
pub fn run(args: &CombineArgs) -> Result<ExitCode, Box<dyn Error>> {
    let config = args.config.resolve()?;
    info!(
        "combining {} with {}",
        config.usr_path().display(),
        config.mss_path().display()
    );
    match combine_persisted(&config)? {
        CombineOutcome::MissingUsr { path } => {
            println!("File not found: {}", path.display());
            Ok(ExitCode::from(1))
        }
        CombineOutcome::MissingMss { path } => {
            println!("File not found: {}", path.display());
            Ok(ExitCode::from(2))
        }
        CombineOutcome::RejectedUsr { path, error } => {
            eprintln!("error: {}: {error}", path.display());
            Ok(ExitCode::from(1))
        }
        CombineOutcome::RejectedMss { path, error } => {
            eprintln!("error: {}: {error}", path.display());
            Ok(ExitCode::from(2))
        }
        CombineOutcome::Completed {
            slices_cube,
            seconds,
            ..
        } => {
            println!("Execution time of pairwise_unions_slice_cube: {seconds:.6} s");
            println!(
                "Can four hyperplanes slice the {}-cube: {}",
                config.dimension,
                u8::from(slices_cube)
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
