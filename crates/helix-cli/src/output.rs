use crate::CliResult;

use std::io::{self, Write};

/// Prints a command result: the output on `out`, or one `Error:` line on
/// `err`. Returns whether the command succeeded.
pub fn report(
    result: CliResult<String>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match result {
        Ok(output) => {
            writeln!(out, "{output}")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "Error: {e}")?;
            Ok(false)
        }
    }
}
