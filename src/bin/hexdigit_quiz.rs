use std::io::{self, BufRead, Write};

use clap::Parser;
use hexplain::quiz::hex_digits::HexDigitRound;
use rand::{rngs::StdRng, SeedableRng};

/// Practice converting hexadecimal digits into binary. Rounds repeat until
/// end of input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the round generator, for reproducible sessions.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();

    loop {
        let round = HexDigitRound::generate(&mut rng);

        print!("{}", round.prompt());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut answer = String::new();
        match stdin.lock().read_line(&mut answer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        if round.check(&answer) {
            println!("Correct!");
        } else {
            println!("Wrong! Right answer is: {}", round.expected());
        }
    }
}
