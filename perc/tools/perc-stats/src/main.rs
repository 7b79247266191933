#![forbid(unsafe_code)]

use std::num::NonZeroUsize;

use clap::Parser;
use log::{info, LevelFilter};
use perc::{percolate, PercolationStats};
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

////////////////////////////////////////////////////////////////////////////////

/// Estimates the percolation threshold of an n-by-n grid.
#[derive(Parser, Debug)]
#[command(name = "perc-stats")]
struct Args {
    /// Grid size n
    size: NonZeroUsize,

    /// Number of independent trials
    trials: NonZeroUsize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the fullness-set forest of one extra trial
    #[arg(long)]
    dump_forest: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        level_filter(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let (size, trials) = (args.size.get(), args.trials.get());
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stats = PercolationStats::new(size, trials, &mut rng)?;

    println!("mean                    = {}", stats.mean());
    match stats.stddev() {
        Some(stddev) => println!("stddev                  = {stddev}"),
        None => println!("stddev                  = undefined"),
    }
    match stats.confidence() {
        Some((lo, hi)) => println!("95% confidence interval = [{lo}, {hi}]"),
        None => println!("95% confidence interval = undefined"),
    }

    if args.dump_forest {
        info!("running an extra trial for the forest dump");
        let grid = percolate(size, &mut rng)?;
        print!("{}", grid.fullness_set().forest());
    }

    Ok(())
}
