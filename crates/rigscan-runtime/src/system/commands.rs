//! External command execution for hardware queries.

use std::process::Command;

use thiserror::Error;

/// Why a query command produced no usable output.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{program} could not be started: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed {
        program: &'static str,
        status: std::process::ExitStatus,
    },
}

/// Run `program` with `args` and return its stdout, lossily decoded.
pub fn run_query(program: &'static str, args: &[&str]) -> Result<String, CommandError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| CommandError::Spawn { program, source })?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            program,
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = run_query("rigscan-definitely-not-a-command", &[]).unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
        assert!(err.to_string().contains("rigscan-definitely-not-a-command"));
    }
}
