#[cfg(feature = "cli")]
pub mod cli;
pub mod roots;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_inputs};
    use crate::carbonate::solver::compute_summary;

    let args = Args::parse();
    let (inp, ass) = parse_inputs(&args)?;

    let out = compute_summary(&inp, &ass)?;

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
