use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use rpn_calculator::{evaluate, format_result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Evaluates an arithmetic expression and prints the result with four decimals
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// File containing the expression, standard input is read when omitted or `-`
    #[clap(parse(from_os_str))]
    file: Option<PathBuf>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let result = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => evaluate_file(path)?,
        _ => {
            debug!("Reading expression from standard input");
            evaluate(io::stdin().lock())?
        }
    };
    info!("Result: {}", result);

    println!("{}", format_result(result));
    Ok(())
}

fn evaluate_file(path: &Path) -> Result<f64> {
    debug!("Reading expression from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    evaluate(file)
}
