//! Diagnostic commands offered by the control buttons.
//!
//! Each button maps to one fixed command line. Nothing typed by the user is
//! ever interpolated into a command.

use std::process::Stdio;

use thiserror::Error;

/// Text shown when a command prints nothing on stdout.
pub const EMPTY_OUTPUT_TEXT: &str = "Command executed successfully.";

/// The fixed set of diagnostic commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCommand {
    Uptime,
    ProcessList,
    DiskUsage,
    Network,
}

impl DiagnosticCommand {
    /// All commands in button order.
    pub const ALL: [DiagnosticCommand; 4] = [
        DiagnosticCommand::Uptime,
        DiagnosticCommand::ProcessList,
        DiagnosticCommand::DiskUsage,
        DiagnosticCommand::Network,
    ];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticCommand::Uptime => "Show Uptime",
            DiagnosticCommand::ProcessList => "Process List",
            DiagnosticCommand::DiskUsage => "Disk Usage",
            DiagnosticCommand::Network => "Network",
        }
    }

    /// Shell command line run for this button.
    pub fn command_line(&self) -> &'static str {
        match self {
            DiagnosticCommand::Uptime => "uptime",
            DiagnosticCommand::ProcessList => "ps -ef",
            DiagnosticCommand::DiskUsage => "df -h",
            DiagnosticCommand::Network => "ifconfig",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            DiagnosticCommand::Uptime => '1',
            DiagnosticCommand::ProcessList => '2',
            DiagnosticCommand::DiskUsage => '3',
            DiagnosticCommand::Network => '4',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.hotkey() == key)
    }
}

/// Command runner errors.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to start `{command}` with {shell}: {source}")]
    Spawn {
        command: String,
        shell: String,
        #[source]
        source: std::io::Error,
    },
}

/// Captured result of one command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub command: String,
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` if the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Text for the output dialog: stdout, or a success note when empty.
    ///
    /// The exit status is not consulted.
    pub fn display_text(&self) -> &str {
        if self.stdout.is_empty() {
            EMPTY_OUTPUT_TEXT
        } else {
            &self.stdout
        }
    }
}

/// Runs diagnostic commands through a shell, synchronously from the
/// caller's point of view: no timeout and no output limit.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    shell: String,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

impl CommandRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Run `command` and capture its output.
    pub async fn run(&self, command: DiagnosticCommand) -> Result<CommandOutput, CommandError> {
        self.run_line(command.command_line()).await
    }

    pub(crate) async fn run_line(&self, line: &str) -> Result<CommandOutput, CommandError> {
        tracing::debug!(shell = %self.shell, command = line, "Running diagnostic command");

        let output = tokio::process::Command::new(&self.shell)
            .arg("-c")
            .arg(line)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| CommandError::Spawn {
                command: line.to_string(),
                shell: self.shell.clone(),
                source,
            })?;

        let result = CommandOutput {
            command: line.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };

        tracing::info!(
            command = line,
            exit_code = ?result.exit_code,
            stdout_bytes = result.stdout.len(),
            "Diagnostic command finished"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_button_has_one_fixed_command() {
        let lines: Vec<_> = DiagnosticCommand::ALL
            .iter()
            .map(|c| c.command_line())
            .collect();
        assert_eq!(lines, vec!["uptime", "ps -ef", "df -h", "ifconfig"]);

        let unique: HashSet<_> = lines.iter().collect();
        assert_eq!(unique.len(), DiagnosticCommand::ALL.len());
    }

    #[test]
    fn test_hotkeys_round_trip() {
        for cmd in DiagnosticCommand::ALL {
            assert_eq!(DiagnosticCommand::from_hotkey(cmd.hotkey()), Some(cmd));
        }
        assert_eq!(DiagnosticCommand::from_hotkey('5'), None);
        assert_eq!(DiagnosticCommand::from_hotkey('q'), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DiagnosticCommand::Uptime.label(), "Show Uptime");
        assert_eq!(DiagnosticCommand::Network.label(), "Network");
    }

    #[test]
    fn test_display_text_falls_back_when_stdout_empty() {
        let output = CommandOutput {
            command: "true".into(),
            stdout: String::new(),
            stderr: "warning\n".into(),
            exit_code: Some(1),
        };
        assert_eq!(output.display_text(), EMPTY_OUTPUT_TEXT);
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let runner = CommandRunner::default();
        let output = runner.run_line("echo hello").await.unwrap();
        assert_eq!(output.stdout, "hello\n");
        assert_eq!(output.display_text(), "hello\n");
        assert_eq!(output.exit_code, Some(0));
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_not_an_error() {
        let runner = CommandRunner::default();
        let output = runner.run_line("echo oops >&2; exit 3").await.unwrap();
        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.stderr, "oops\n");
        assert_eq!(output.display_text(), EMPTY_OUTPUT_TEXT);
    }

    #[tokio::test]
    async fn test_missing_shell_is_spawn_error() {
        let runner = CommandRunner::new("/nonexistent/first-boot-shell");
        let err = runner.run(DiagnosticCommand::Uptime).await.unwrap_err();
        assert!(matches!(err, CommandError::Spawn { ref command, .. } if command == "uptime"));
    }
}
