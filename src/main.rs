use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::time::Instant;
use tracing::error;

use logtally::{analyze_logs, utils, Args, USAGE};

fn main() -> Result<()> {
    let started = Instant::now();
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    if args.files.is_empty() {
        println!("{}", USAGE);
        return Ok(());
    }

    utils::validate_args(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = analyze_logs(&args, started, &mut out).context("Failed to write report") {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
