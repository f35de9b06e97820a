use std::env;
use std::io::Read;
use std::process::{Command, Stdio};

use crate::error::StatsError;

/// Somewhere alias definitions can be read from
///
/// Implementations return the raw `name=expansion` listing. An empty listing means the
/// source had nothing to offer.
pub trait AliasSource {
    /// Short description used in log messages
    fn describe(&self) -> String;

    fn read_listing(&mut self) -> Result<String, StatsError>;
}

/// Alias listing piped into the process, e.g. `alias | atuin-stats`
pub struct PipedInput<R> {
    reader: R,
}

impl<R: Read> PipedInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> AliasSource for PipedInput<R> {
    fn describe(&self) -> String {
        "piped input".to_string()
    }

    fn read_listing(&mut self) -> Result<String, StatsError> {
        let mut buf = Vec::new();
        self.reader.read_to_end(&mut buf).map_err(|e| {
            StatsError::AliasSourceUnavailable(format!("failed to read piped input: {}", e))
        })?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Asks the user's interactive shell for its current aliases
pub struct InteractiveShell {
    shell: String,
}

impl InteractiveShell {
    pub fn new(shell: impl Into<String>) -> Self {
        Self { shell: shell.into() }
    }

    /// Use `$SHELL`, falling back to `sh`
    pub fn from_env() -> Self {
        Self::from_shell_var_internal(env::var("SHELL").ok())
    }

    pub(crate) fn from_shell_var_internal(shell: Option<String>) -> Self {
        let shell = shell.filter(|s| !s.trim().is_empty());
        Self::new(shell.unwrap_or_else(|| "sh".to_string()))
    }
}

impl AliasSource for InteractiveShell {
    fn describe(&self) -> String {
        format!("interactive shell {}", self.shell)
    }

    fn read_listing(&mut self) -> Result<String, StatsError> {
        // -i so the shell loads the rc files that define the aliases
        let output = Command::new(&self.shell)
            .args(["-i", "-c", "alias"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| {
                StatsError::AliasSourceUnavailable(format!("failed to run {}: {}", self.shell, e))
            })?;

        if !output.status.success() {
            return Err(StatsError::AliasSourceUnavailable(format!(
                "{} exited with {}",
                self.shell, output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// A source known up front to have nothing, e.g. stdin attached to a terminal
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl AliasSource for Unavailable {
    fn describe(&self) -> String {
        "no alias source".to_string()
    }

    fn read_listing(&mut self) -> Result<String, StatsError> {
        Err(StatsError::AliasSourceUnavailable(self.reason.clone()))
    }
}
