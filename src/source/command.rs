//! Helpers for running backend commands
//!
//! Listing runs synchronously on the UI thread. Log reads run as tokio child
//! processes that are killed when the read is dropped, so a superseded or
//! timed-out load never leaves a `journalctl`/`docker logs` behind.

use std::process::{Command, Output};

use super::{split_lines, SourceError};

/// Which output streams to keep from a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Streams {
    /// stdout only
    Stdout,
    /// stdout followed by stderr (container runtimes split app output across both)
    Both,
}

/// Run a command to completion and return its output lines.
///
/// A non-zero exit becomes [`SourceError::CommandFailed`] carrying the
/// trimmed stderr so it can be shown in-pane.
pub(crate) fn run_lines(
    program: &str,
    args: &[&str],
    streams: Streams,
) -> Result<Vec<String>, SourceError> {
    let command_line = display_command(program, args);
    tracing::debug!("Running {}", command_line);

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| SourceError::Spawn {
            command: command_line.clone(),
            source,
        })?;

    collect_output(command_line, output, streams)
}

/// Async variant of [`run_lines`]; dropping the future kills the child
pub(crate) async fn run_lines_async(
    program: &str,
    args: &[&str],
    streams: Streams,
) -> Result<Vec<String>, SourceError> {
    let command_line = display_command(program, args);
    tracing::debug!("Running {} (async)", command_line);

    let output = tokio::process::Command::new(program)
        .args(args)
        .stdin(std::process::Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| SourceError::Spawn {
            command: command_line.clone(),
            source,
        })?;

    collect_output(command_line, output, streams)
}

fn collect_output(
    command_line: String,
    output: Output,
    streams: Streams,
) -> Result<Vec<String>, SourceError> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(SourceError::CommandFailed {
            command: command_line,
            status: output.status.to_string(),
            stderr: if stderr.is_empty() {
                "no error output".to_string()
            } else {
                stderr
            },
        });
    }

    let mut lines = split_lines(&output.stdout);
    if streams == Streams::Both {
        lines.extend(split_lines(&output.stderr));
    }
    Ok(lines)
}

fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
