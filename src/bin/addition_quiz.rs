use std::io::{self, BufRead};

use clap::Parser;
use hexplain::quiz::addition::AdditionProblem;
use rand::{rngs::StdRng, SeedableRng};

/// Practice adding binary numbers. The worksheet is printed first; press
/// [ENTER] to reveal the solution row.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the problem generator, for reproducible sessions.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let problem = AdditionProblem::generate(&mut rng);

    for line in problem.worksheet() {
        println!("{line}");
    }

    let mut pause = String::new();
    let _ = io::stdin().lock().read_line(&mut pause);

    println!("{}", problem.solution_row());
}
