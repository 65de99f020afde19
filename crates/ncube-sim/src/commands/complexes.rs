use std::error::Error;
use std::process::ExitCode;

use clap::Args;
use ncube_complex::compute_complexes;
use ncube_core::EdgeLexicon;
use ncube_slice::complex_to_sliceable_set;

use super::ConfigArgs;

#[derive(Args, Debug)]
pub struct ComplexesArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    /// Print every complex with the edges it cuts.
    #[arg(long)]
    pub list: bool,
    /// Emit the complexes as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ComplexesArgs) -> Result<ExitCode, Box<dyn Error>> {
    let config = args.config.resolve()?;
    let cube = config.cube()?;
    let complexes = compute_complexes(cube, &config.oracle);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&complexes)?);
        return Ok(ExitCode::SUCCESS);
    }
    let lexicon = EdgeLexicon::new(cube);
    for size in 1..=complexes.max_size() {
        let layer = complexes.by_size(size);
        println!("size {size}: {} complexes", layer.len());
        if args.list {
            for complex in layer {
                println!("  {complex} cuts {}", complex_to_sliceable_set(complex, &lexicon));
            }
        }
    }
    println!("total: {}", complexes.len());
    Ok(ExitCode::SUCCESS)
}
