use std::process;

use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use hashkey::survey::{count_collisions, lowercase_words};
use hashkey::{Keyer, LogReporter, Result};

#[derive(Parser)]
#[command(version, about = "Hash keys, prime bucket counts and gray codes")]
struct Cli {
    /// More output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Quality string hash of each argument
    HashStr { text: Vec<String> },
    /// Fast string hash of each argument
    HashFast { text: Vec<String> },
    /// Hash of the point (x, y)
    #[command(allow_negative_numbers = true)]
    HashPoint { x: i32, y: i32 },
    /// Hash of a 64-bit float
    #[command(allow_negative_numbers = true)]
    HashFloat { val: f64 },
    /// Primality and smallest factor
    IsPrime {
        n: u64,
        /// Use the historical classification (2 composite, square bound exclusive)
        #[arg(long)]
        legacy: bool,
    },
    /// Smallest prime greater than start
    NextPrime { start: u32 },
    /// Binary to gray code
    GrayEncode { val: u32 },
    /// Gray code to binary
    GrayDecode { val: u32 },
    /// Count hash collisions over a set of words
    Survey(SurveyArgs),
}

#[derive(Args)]
struct SurveyArgs {
    /// Hash every lowercase word of this length
    #[arg(long, conflicts_with = "random")]
    len: Option<usize>,

    /// Hash this many random lowercase words
    #[arg(long)]
    random: Option<usize>,

    /// Longest random word
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u64).range(1..))]
    max_len: u64,

    /// Seed for random words
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Survey the fast hash instead of the quality hash
    #[arg(long)]
    fast: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if run(cli.command).is_err() {
        // already reported through the log
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let keyer: Keyer<LogReporter> = Keyer::default();

    match command {
        Command::HashStr { text } => {
            for t in &text {
                println!("{} {}", keyer.hash_str(t)?, t);
            }
        }
        Command::HashFast { text } => {
            for t in &text {
                println!("{} {}", keyer.hash_str_fast(t)?, t);
            }
        }
        Command::HashPoint { x, y } => println!("{}", keyer.hash_point(x, y)),
        Command::HashFloat { val } => println!("{}", keyer.hash_float(val)),
        Command::IsPrime { n, legacy } => {
            let p = if legacy {
                keyer.is_prime_legacy(n)?
            } else {
                keyer.is_prime(n)?
            };
            match p.factor {
                _ if p.is_prime => println!("{} is prime", n),
                Some(f) => println!("{} is not prime, smallest factor {}", n, f),
                None => println!("{} is not prime", n),
            }
        }
        Command::NextPrime { start } => println!("{}", keyer.next_prime(start)?),
        Command::GrayEncode { val } => println!("{}", keyer.gray_encode(val)),
        Command::GrayDecode { val } => println!("{}", keyer.gray_decode(val)),
        Command::Survey(args) => survey(&keyer, args)?,
    }
    Ok(())
}

fn survey(keyer: &Keyer<LogReporter>, args: SurveyArgs) -> Result<()> {
    let words: Box<dyn Iterator<Item = Vec<u8>>> = match (args.len, args.random) {
        (_, Some(n)) => {
            let max_len = args.max_len;
            let mut rng = SmallRng::seed_from_u64(args.seed);
            Box::new((0..n).map(move |_| {
                let len = rng.random_range(1..=max_len);
                (0..len)
                    .map(|_| rng.random_range(b'a'..=b'z'))
                    .collect::<Vec<u8>>()
            }))
        }
        (Some(len), None) => Box::new(lowercase_words(len)),
        (None, None) => Box::new(lowercase_words(5)),
    };

    let keys = words
        .map(|w| {
            if args.fast {
                keyer.hash_str_fast(&w)
            } else {
                keyer.hash_str(&w)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let total = keys.len();
    let collisions = count_collisions(keys);
    println!("{} words, {} collisions", total, collisions);
    Ok(())
}
