///
/// crypt CLI - URL-safe hashing, HMAC, comparison and random tokens
///
/// - crypt crypt:hmac <data> <key>: HMAC-SHA256 token
/// - crypt crypt:hash <data>: SHA-256 token
/// - crypt crypt:hash-equals <known> <user>: constant-time comparison, exit 0 if equal
/// - crypt crypt:random-bytes [count]: token of `count` secure random bytes (default 32)
///

use std::process::ExitCode;

use crypt::{CliError, execute, logging, parse};

fn main() -> ExitCode {
    let request = match parse(std::env::args_os()) {
        Ok(request) => request,
        Err(CliError::Usage(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    logging::init(&request.config);

    let mut stdout = std::io::stdout().lock();
    match execute(&request, &mut stdout) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
