//! systemd journal backend
//!
//! Units are listed with `systemctl list-units` and read with `journalctl -u`.

use super::command::{run_lines, run_lines_async, Streams};
use super::SourceError;

/// Parse `systemctl list-units --plain --no-legend` output into unit names
///
/// The unit name is the first column. Some systemd versions still prefix
/// failed units with a bullet even in plain mode, so that is stripped.
pub fn parse_unit_list(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| {
            line.trim_start_matches(['●', '*', ' '])
                .split_whitespace()
                .next()
        })
        .map(str::to_string)
        .collect()
}

/// List service units known to the service manager
pub fn list_units(unit_list_command: &str) -> Result<Vec<String>, SourceError> {
    let lines = run_lines(
        unit_list_command,
        &[
            "list-units",
            "--type=service",
            "--all",
            "--plain",
            "--no-legend",
            "--no-pager",
        ],
        Streams::Stdout,
    )?;
    Ok(parse_unit_list(&lines))
}

/// Build the `journalctl` arguments for one unit
pub fn journal_args(unit: &str, max_lines: Option<usize>) -> Vec<String> {
    let mut args = vec![
        "--unit".to_string(),
        unit.to_string(),
        "--no-pager".to_string(),
        "--output=short-iso".to_string(),
    ];
    if let Some(max) = max_lines {
        args.push(format!("--lines={}", max));
    }
    args
}

/// Read the journal of one unit
pub async fn read_unit(
    journal_command: &str,
    unit: &str,
    max_lines: Option<usize>,
) -> Result<Vec<String>, SourceError> {
    let args = journal_args(unit, max_lines);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run_lines_async(journal_command, &args, Streams::Stdout).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_parse_unit_list() {
        let output = lines(
            "cron.service          loaded active   running Regular background program processing daemon\n\
             sshd.service          loaded active   running OpenSSH server daemon\n\
             \n\
             ● bad.service         loaded failed   failed  Broken unit\n",
        );
        assert_eq!(
            parse_unit_list(&output),
            vec!["cron.service", "sshd.service", "bad.service"]
        );
    }

    #[test]
    fn test_parse_unit_list_empty() {
        assert!(parse_unit_list(&[]).is_empty());
        assert!(parse_unit_list(&lines("   \n\n")).is_empty());
    }

    #[test]
    fn test_journal_args() {
        let args = journal_args("sshd.service", None);
        assert_eq!(
            args,
            vec!["--unit", "sshd.service", "--no-pager", "--output=short-iso"]
        );

        let args = journal_args("sshd.service", Some(500));
        assert_eq!(args.last().unwrap(), "--lines=500");
    }
}
