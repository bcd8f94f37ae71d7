//! External program output capture.

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::HostError;

/// Run `program` with `args` and return its output as text.
///
/// Standard input is inherited from the caller. Standard output and
/// standard error are captured and returned together, stdout first, as
/// lossy UTF-8. If the program cannot be started or exits unsuccessfully
/// only the error is returned.
pub fn run_capture<I, S>(program: &str, args: I) -> Result<String, HostError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .output()
        .map_err(|source| HostError::Spawn {
            program: program.to_string(),
            source,
        })?;

    debug!(program, status = %output.status, "program exited");

    if !output.status.success() {
        return Err(HostError::Failed {
            program: program.to_string(),
            status: output.status,
        });
    }

    let mut combined = output.stdout;
    combined.extend_from_slice(&output.stderr);
    Ok(String::from_utf8_lossy(&combined).into_owned())
}
