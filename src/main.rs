//! gotempl CLI
//!
//! Usage:
//!   gotempl [OPTIONS] <TEMPLATE> <PARAMS>... <OUTPUT_DIR>
//!
//! Options:
//!   -t, --toggle   Accepted for compatibility, no effect
//!   -v, --verbose  Log config and template loading details
//!   -q, --quiet    Only log errors
//!   -h, --help     Print help

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use gotempl::{generate, ConfigError, Error, GenerateConfig, CONFIG_FILE_NAME};

#[derive(Parser)]
#[command(name = "gotempl")]
#[command(about = "Generate files from the templates declared in gotempl.json")]
#[command(after_help = "Example:\n    gotempl controller Todo src/controllers/")]
struct Cli {
    /// Template name, parameter values, then the output directory
    #[arg(value_name = "ARGS")]
    args: Vec<String>,

    /// Accepted for compatibility, has no effect
    #[arg(short, long)]
    toggle: bool,

    /// Log config and template loading details
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return parse_failure(e),
    };
    init_logger(if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    });
    if cli.toggle {
        log::debug!("--toggle has no effect");
    }

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = GenerateConfig::new().with_working_dir(working_dir);

    match generate(cli.args, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// `--help` / `--version` succeed; any other parser error is fatal with exit code 1
fn parse_failure(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = err.print();
        return ExitCode::SUCCESS;
    }

    init_logger("info");
    let err = Error::from(err);
    report(&err);
    ExitCode::from(err.exit_code() as u8)
}

fn init_logger(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn report(err: &Error) {
    log::error!("{}", err);
    if let Error::Config(parse @ ConfigError::Parse { .. }) = err {
        eprint!("{}", parse.format(CONFIG_FILE_NAME, io::stderr().is_terminal()));
    }
}
