///
/// Command registry.
///
/// Each command is a row in `COMMANDS`: its name, help text, argument
/// definitions and a handler. The clap subcommand is generated from the
/// row, so parsing, help output and dispatch all read the same table.
///
/// Handlers receive two shared helpers instead of inheriting plumbing:
/// - `Invocation` for typed access to parsed arguments
/// - `Output` for writing results to stdout
///

use clap::{Arg, ArgMatches, value_parser};
use crypt_primitives::{DEFAULT_RANDOM_BYTES, hash_base64, hash_equals, hmac_base64, random_bytes_base64};
use tracing::{debug, trace};

use crate::errors::CliError;
use crate::output::Output;

pub type Handler = fn(&Invocation<'_>, &mut Output<'_>) -> Result<Status, CliError>;

/// Outcome of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Error => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Required string argument.
    Text,
    /// Optional non-negative integer with a default.
    Count { default: usize },
}

#[derive(Debug)]
pub struct ArgDef {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: ArgKind,
}

impl ArgDef {
    fn to_clap(&self) -> Arg {
        let arg = Arg::new(self.name).help(self.help);
        match self.kind {
            ArgKind::Text => arg.required(true).value_parser(value_parser!(String)),
            ArgKind::Count { default } => arg
                .required(false)
                .default_value(default.to_string())
                .value_parser(value_parser!(usize)),
        }
    }
}

pub struct CommandDef {
    pub name: &'static str,
    pub about: &'static str,
    pub args: &'static [ArgDef],
    pub handler: Handler,
}

impl CommandDef {
    /// Build the clap subcommand for this row.
    pub fn to_clap(&self) -> clap::Command {
        self.args
            .iter()
            .fold(clap::Command::new(self.name).about(self.about), |cmd, arg| {
                cmd.arg(arg.to_clap())
            })
    }
}

impl std::fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Typed view of one command's parsed arguments.
pub struct Invocation<'a> {
    matches: &'a ArgMatches,
}

impl<'a> Invocation<'a> {
    pub fn new(matches: &'a ArgMatches) -> Self {
        Self { matches }
    }

    pub fn text(&self, name: &'static str) -> Result<&'a str, CliError> {
        self.matches
            .get_one::<String>(name)
            .map(String::as_str)
            .ok_or(CliError::MissingArgument(name))
    }

    pub fn count(&self, name: &'static str) -> Result<usize, CliError> {
        self.matches
            .get_one::<usize>(name)
            .copied()
            .ok_or(CliError::MissingArgument(name))
    }
}

pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "crypt:hmac",
        about: "Calculates a base-64 encoded, URL-safe sha-256 hmac",
        args: &[
            ArgDef { name: "data", help: "Value to be validated with the hmac", kind: ArgKind::Text },
            ArgDef { name: "key", help: "Secret key", kind: ArgKind::Text },
        ],
        handler: hmac,
    },
    CommandDef {
        name: "crypt:hash",
        about: "Calculates a base-64 encoded, URL-safe sha-256 hash",
        args: &[ArgDef { name: "data", help: "String to be hashed", kind: ArgKind::Text }],
        handler: hash,
    },
    CommandDef {
        name: "crypt:hash-equals",
        about: "Compares strings in constant time; exits 0 when equal, 1 otherwise",
        args: &[
            ArgDef { name: "known_string", help: "The expected string", kind: ArgKind::Text },
            ArgDef { name: "user_string", help: "The user supplied string to check", kind: ArgKind::Text },
        ],
        handler: hash_equals_cmd,
    },
    CommandDef {
        name: "crypt:random-bytes",
        about: "Returns a URL-safe, base64 encoded string of secure random bytes",
        args: &[ArgDef {
            name: "count",
            help: "Number of random bytes to fetch and encode",
            kind: ArgKind::Count { default: DEFAULT_RANDOM_BYTES },
        }],
        handler: random_bytes,
    },
];

pub fn find(name: &str) -> Option<&'static CommandDef> {
    COMMANDS.iter().find(|def| def.name == name)
}

fn hmac(inv: &Invocation<'_>, out: &mut Output<'_>) -> Result<Status, CliError> {
    let data = inv.text("data")?;
    let key = inv.text("key")?;
    trace!(data_len = data.len(), key_len = key.len(), "hmac-sha256");
    out.line(&hmac_base64(data.as_bytes(), key.as_bytes()))?;
    Ok(Status::Ok)
}

fn hash(inv: &Invocation<'_>, out: &mut Output<'_>) -> Result<Status, CliError> {
    let data = inv.text("data")?;
    trace!(data_len = data.len(), "sha-256");
    out.line(&hash_base64(data.as_bytes()))?;
    Ok(Status::Ok)
}

fn hash_equals_cmd(inv: &Invocation<'_>, out: &mut Output<'_>) -> Result<Status, CliError> {
    let known = inv.text("known_string")?;
    let user = inv.text("user_string")?;
    if hash_equals(known.as_bytes(), user.as_bytes()) {
        debug!("strings match");
        out.success()?;
        return Ok(Status::Ok);
    }
    debug!("strings differ");
    Ok(Status::Error)
}

fn random_bytes(inv: &Invocation<'_>, out: &mut Output<'_>) -> Result<Status, CliError> {
    let count = inv.count("count")?;
    debug!(count, "fetching random bytes");
    out.line(&random_bytes_base64(count)?)?;
    Ok(Status::Ok)
}
