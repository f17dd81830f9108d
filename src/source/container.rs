//! Container runtime backend
//!
//! Works with any docker-compatible CLI (`docker`, `podman`, `nerdctl`).

use super::command::{run_lines, run_lines_async, Streams};
use super::SourceError;

/// List container names, including stopped containers
pub fn list_containers(runtime: &str) -> Result<Vec<String>, SourceError> {
    run_lines(
        runtime,
        &["ps", "--all", "--format", "{{.Names}}"],
        Streams::Stdout,
    )
}

/// Build the `logs` arguments for one container
pub fn logs_args(name: &str, max_lines: Option<usize>) -> Vec<String> {
    let mut args = vec!["logs".to_string()];
    if let Some(max) = max_lines {
        args.push("--tail".to_string());
        args.push(max.to_string());
    }
    args.push(name.to_string());
    args
}

/// Read a container's logs.
///
/// The runtime replays the container's stderr on its own stderr, so both
/// streams are kept: stdout lines first, then stderr lines.
pub async fn read_logs(
    runtime: &str,
    name: &str,
    max_lines: Option<usize>,
) -> Result<Vec<String>, SourceError> {
    let args = logs_args(name, max_lines);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run_lines_async(runtime, &args, Streams::Both).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_args() {
        assert_eq!(logs_args("web", None), vec!["logs", "web"]);
        assert_eq!(
            logs_args("web", Some(100)),
            vec!["logs", "--tail", "100", "web"]
        );
    }

    #[test]
    fn test_missing_runtime_is_error() {
        let result = list_containers("logscope-no-such-container-runtime");
        assert!(matches!(result, Err(SourceError::Spawn { .. })));
    }
}
