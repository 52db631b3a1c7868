//! The `polycalc` binary: wires [`polycalc::calc::engine::Engine`] to real
//! stdin/stdout/stderr, initializes the logging subscriber, and sets the
//! process exit code.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use polycalc::calc::engine::Engine;
use polycalc::config::CalculatorConfig;

/// Stack-based calculator for sparse, recursively-nested multivariate
/// polynomials.
#[derive(Parser, Debug)]
#[command(name = "polycalc", about, version)]
struct Cli {
    /// Read the program from this file instead of standard input.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Raise logging verbosity; repeat for more (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.input {
        Some(path) => File::open(path).and_then(|f| run(BufReader::new(f))),
        None => run(BufReader::new(io::stdin().lock())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("polycalc: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(reader: impl BufRead) -> io::Result<()> {
    let mut engine = Engine::new(CalculatorConfig::default());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (i, line) in reader.lines().enumerate() {
        let line_number = i as u64 + 1;
        let line = line?;
        match engine.process_line(line_number, &line) {
            Ok(Some(text)) => {
                writeln!(out, "{text}")?;
                out.flush()?;
            }
            Ok(None) => {}
            Err(err) => {
                eprintln!("ERROR {line_number} {err}");
            }
        }
    }
    Ok(())
}
