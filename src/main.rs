use std::{fs, process::ExitCode};

use clap::Parser;
use exprtree::{Error, parse};
use tracing::{Level, debug};

/// exprtree evaluates arithmetic and boolean expressions such as
/// `sqrt(2) * 2 > 2.5 ? 1 : 0`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprtree to read a file and evaluate each non-empty line.
    #[arg(short, long)]
    file: bool,

    /// Also print the canonical form of each expression before its value.
    #[arg(short, long)]
    canonical: bool,

    /// Raise log verbosity on stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_max_level(level)
                             .init();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let expressions: Vec<&str> = if args.file {
        source.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
    } else {
        vec![source.as_str()]
    };

    let mut status = ExitCode::SUCCESS;
    for expression in expressions {
        if let Err(e) = run(expression, args.canonical) {
            eprintln!("{e}");
            status = ExitCode::FAILURE;
        }
    }
    status
}

/// Parses and evaluates one expression, printing the results to stdout.
fn run(expression: &str, canonical: bool) -> Result<(), Error> {
    debug!(expression, "evaluating");
    let tree = parse(expression)?;
    if canonical {
        println!("{tree}");
    }
    println!("{}", tree.evaluate()?);
    Ok(())
}
