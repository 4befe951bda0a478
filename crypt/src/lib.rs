///
/// # crypt - command-line front end
///
/// Library API behind the `crypt` binary. The binary parses arguments,
/// installs logging and executes; tests drive the same functions with an
/// in-memory writer.
///
/// ```rust,ignore
/// let mut out = Vec::new();
/// let status = crypt::run(["crypt", "crypt:hash", ""], &mut out)?;
/// assert_eq!(out, b"47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU\n");
/// ```
///
/// ## CLI
///
/// ```sh
/// crypt crypt:hmac <data> <key>
/// crypt crypt:hash <data>
/// crypt crypt:hash-equals <known_string> <user_string>
/// crypt crypt:random-bytes [count]
/// ```
///

pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
pub mod output;

use std::ffi::OsString;
use std::io::Write;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{debug, error};

pub use commands::{COMMANDS, CommandDef, Invocation, Status};
pub use config::{Cli, Config};
pub use errors::CliError;
pub use output::Output;

/// A parsed command line, ready to execute.
#[derive(Debug)]
pub struct Request {
    pub config: Config,
    command: &'static CommandDef,
    matches: ArgMatches,
}

impl Request {
    pub fn command_name(&self) -> &'static str {
        self.command.name
    }
}

/// The full clap command: global options plus one subcommand per registry row.
pub fn command() -> clap::Command {
    COMMANDS
        .iter()
        .fold(Cli::command(), |cmd, def| cmd.subcommand(def.to_clap()))
        .subcommand_required(true)
        .arg_required_else_help(true)
}

pub fn parse<I, T>(args: I) -> Result<Request, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut matches = command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    let (name, sub_matches) = matches.remove_subcommand().ok_or(CliError::MissingCommand)?;
    let command = commands::find(&name).ok_or(CliError::UnknownCommand(name))?;

    Ok(Request {
        config: Config::from(&cli),
        command,
        matches: sub_matches,
    })
}

pub fn execute(request: &Request, stdout: &mut dyn Write) -> Result<Status, CliError> {
    let name = request.command.name;
    debug!(command = name, "dispatching");

    let invocation = Invocation::new(&request.matches);
    let mut output = Output::new(stdout);
    let result = (request.command.handler)(&invocation, &mut output);

    match &result {
        Ok(status) => debug!(command = name, ?status, "finished"),
        Err(e) => error!(command = name, error = %e, "failed"),
    }
    result
}

/// Parse `args` and execute the selected command, writing to `stdout`.
pub fn run<I, T>(args: I, stdout: &mut dyn Write) -> Result<Status, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let request = parse(args)?;
    execute(&request, stdout)
}
