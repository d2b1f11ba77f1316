use clap::Parser;
use hexplain::convert::fraction::DEFAULT_MAX_DIGITS;

/// hexplain walks through the conversion of a decimal number into
/// hexadecimal, printing every intermediate division and multiplication
/// step.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum number of fractional hexadecimal digits before the expansion
    /// is cut off.
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DIGITS)]
    max_digits: usize,

    /// A decimal number (with optional fractional part) to convert.
    #[arg(allow_negative_numbers = true)]
    input: f64,
}

fn main() {
    let args = Args::parse();

    match hexplain::convert_report(args.input, args.max_digits) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
