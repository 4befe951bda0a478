///
/// CLI error types.
///
/// Usage errors (bad arguments, unknown commands) exit with 2 before any
/// cryptographic work runs. Runtime failures exit with 1.
///

use crypt_primitives::CryptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("No command given")]
    MissingCommand,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Missing argument '{0}'")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Crypt(#[from] CryptError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(e) => u8::try_from(e.exit_code()).unwrap_or(2),
            CliError::MissingCommand
            | CliError::UnknownCommand(_)
            | CliError::MissingArgument(_) => 2,
            CliError::Crypt(_) | CliError::Io(_) => 1,
        }
    }
}
