//! Crate-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::template::TemplateError;

/// Minimum number of positional arguments: template name, one parameter, output dir
pub const MIN_ARGS: usize = 3;

/// Errors that stop a generation run
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected by the command line parser
    #[error("{0}")]
    Cli(#[from] clap::Error),

    #[error("No arguments provided!")]
    NoArguments,

    #[error("At least 3 arguments required, got {given}. ex.: gotempl controller Todo ...params src/controllers/")]
    NotEnoughArguments { given: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl Error {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Cli(_)
            | Error::NoArguments
            | Error::NotEnoughArguments { .. }
            | Error::Config(_)
            | Error::Template(_) => 1,
        }
    }

    /// True for command line usage mistakes
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::Cli(_) | Error::NoArguments | Error::NotEnoughArguments { .. }
        )
    }
}
