use std::error::Error;
use std::process::ExitCode;

use clap::Args;
use ncube_slice::run_pipeline;

use super::ConfigArgs;

#[derive(Args, Debug)]
pub struct PipelineArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    /// Persist the second-level collections (with manifests).
    #[arg(long)]
    pub persist: bool,
}

pub fn run(args: &PipelineArgs) -> Result<ExitCode, Box<dyn Error>> {
    let mut config = args.config.resolve()?;
    config.persist |= args.persist;
    let report = run_pipeline(&config, &config.oracle)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!(
        "Can four hyperplanes slice the {}-cube: {}",
        report.dimension, report.four_hyperplanes
    );
    Ok(ExitCode::SUCCESS)
}
