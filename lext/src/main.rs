//! lext - command-line front end for the dfalex lexer.
//!
//! Parses arguments with clap, sets up logging, loads `lext.toml` and
//! dispatches to the `tokenize` or `check` handler.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokenize, CheckArgs, TokenizeArgs};
use config::Config;
use error::{LextError, Result};

/// lext - tokenize and check Java-flavoured source files
#[derive(Parser, Debug)]
#[command(name = "lext")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check Java-flavoured source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each input
    ///
    /// Inputs are lexed in parallel and printed in the order given, one
    /// token per line or as JSON.
    Tokenize(TokenizeCommand),

    /// Report lexical errors
    ///
    /// Prints one diagnostic per error token and fails when any are found,
    /// unless `check.deny_errors` is turned off.
    Check(CheckCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Input files (`-` reads standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Leave out whitespace and comment tokens
    #[arg(long)]
    no_trivia: bool,

    /// Show the line and column of each token
    #[arg(long)]
    spans: bool,

    /// Number of parallel jobs
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files (`-` reads standard input)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Stop printing diagnostics after this many
    #[arg(long)]
    max_errors: Option<usize>,

    /// Number of parallel jobs
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging, load configuration and run the selected command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;
    let config = load_config(cli.config.as_deref())?;
    execute_command(cli.command, cli.verbose, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output. `RUST_LOG`
/// overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: &Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, verbose: bool, config: &Config) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        verbose,
        files: args.files,
        format: args.format,
        no_trivia: args.no_trivia,
        spans: args.spans,
        jobs: args.jobs.map(|j| j as usize),
    };
    run_tokenize(tokenize_args, config).map(|_| ())
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: &Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        files: args.files,
        max_errors: args.max_errors,
        jobs: args.jobs.map(|j| j as usize),
    };
    run_check(check_args, config).map(|_| ())
}
