use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io;

use seahunt::{cli, init_logging};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fix RNG seed for reproducible ship placement (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let mut rng = if let Some(s) = args.seed {
        println!("Using fixed seed: {} (placement will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    cli::run(&mut input, &mut out, &mut rng)
}
