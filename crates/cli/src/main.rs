//! sumcheck CLI
//!
//! Sums 1..=N, prints the total, and checks it against the expected value.
//! With no arguments it runs the reference check for N = 10,000,000.

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use sumcheck_core::{CheckConfig, run_check, write_report};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "sumcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sum the integers 1..=N and check the result", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Upper bound N of the summation (inclusive)
    #[arg(long)]
    bound: Option<u64>,

    /// Value to check the sum against (defaults to N(N+1)/2)
    #[arg(long, allow_negative_numbers = true)]
    expected: Option<i64>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Exit with status 1 when the sum does not match
    #[arg(long, overrides_with = "no_strict")]
    strict: bool,

    /// Exit with status 0 on mismatch, even if the config sets `strict`
    #[arg(long, overrides_with = "strict")]
    no_strict: bool,

    /// Print the elapsed summation time after the verdict
    #[arg(long, overrides_with = "no_timing")]
    timing: bool,

    /// Do not print the elapsed time, even if the config sets `timing`
    #[arg(long, overrides_with = "timing")]
    no_timing: bool,
}

/// Resolve a `--flag` / `--no-flag` pair; `None` leaves the config value alone
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => run_completions(shell),
        None => {
            let code = run_sum(
                cli.config.as_deref(),
                cli.bound,
                cli.expected,
                switch(cli.strict, cli.no_strict),
                switch(cli.timing, cli.no_timing),
            );
            process::exit(code);
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sumcheck=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "sumcheck", &mut io::stdout());
}

fn run_sum(
    config_path: Option<&Path>,
    bound: Option<u64>,
    expected: Option<i64>,
    strict: Option<bool>,
    timing: Option<bool>,
) -> i32 {
    let mut config = match config_path {
        Some(path) => match CheckConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        None => CheckConfig::default(),
    };

    // Flags override the file
    if let Some(bound) = bound {
        config.bound = bound;
    }
    if expected.is_some() {
        config.expected = expected;
    }
    if let Some(strict) = strict {
        config.strict = strict;
    }
    if let Some(timing) = timing {
        config.timing = timing;
    }
    debug!(?config, "effective configuration");

    let outcome = match run_check(&config) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, &outcome).and_then(|_| out.flush()) {
        eprintln!("Error writing report: {}", e);
        return 1;
    }

    if outcome.verdict.is_correct() {
        0
    } else if config.strict {
        warn!(sum = outcome.sum, "sum does not match expected value");
        1
    } else {
        0
    }
}
