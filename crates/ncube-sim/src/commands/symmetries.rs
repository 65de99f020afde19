use std::error::Error;
use std::process::ExitCode;

use clap::Args;
use ncube_core::Cube;
use ncube_sym::SymmetryGroup;

#[derive(Args, Debug)]
pub struct SymmetriesArgs {
    /// Cube dimension.
    #[arg(long, short = 'n', default_value_t = 3)]
    pub dimension: usize,
    /// Print every symmetry and its vertex table.
    #[arg(long)]
    pub list: bool,
}

pub fn run(args: &SymmetriesArgs) -> Result<ExitCode, Box<dyn Error>> {
    let cube = Cube::new(args.dimension)?;
    let group = SymmetryGroup::new(cube);
    println!("{}-cube symmetry group order: {}", cube.dimension(), group.len());
    if args.list {
        for (index, symmetry) in group.symmetries().iter().enumerate() {
            println!(
                "signs={:0width$b} perm={:?} images={:?}",
                symmetry.signs(),
                symmetry.perm(),
                group.vertex_images(index),
                width = cube.dimension()
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}
