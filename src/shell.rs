//! Shell command factory
//!
//! Binds names to shell command lines. Each call to [`ShellCommand::run`]
//! spawns a fresh process through the configured shell and resolves with its
//! captured stdout. Concurrent runs are independent processes: no queueing,
//! no limit, no ordering between them.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{Result, ShapekitError};

/// Shell program and the flag that makes it run a command string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub program: String,
    pub flag: String,
}

impl Default for ShellConfig {
    #[cfg(windows)]
    fn default() -> Self {
        Self {
            program: "cmd".to_string(),
            flag: "/C".to_string(),
        }
    }

    #[cfg(not(windows))]
    fn default() -> Self {
        Self {
            program: "sh".to_string(),
            flag: "-c".to_string(),
        }
    }
}

/// A named, reusable shell command
#[derive(Debug, Clone)]
pub struct ShellCommand {
    name: Arc<str>,
    command: Arc<str>,
    shell: Arc<ShellConfig>,
}

impl ShellCommand {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Spawn the command and capture stdout.
    ///
    /// The future owns everything it needs, so it can be handed to
    /// `tokio::spawn`. A non-zero exit yields
    /// [`ShapekitError::CommandFailed`] carrying the exit code and stderr.
    pub fn run(&self) -> impl Future<Output = Result<String>> + Send + 'static {
        let this = self.clone();
        async move { this.execute().await }
    }

    #[instrument(skip(self), fields(name = %self.name))]
    async fn execute(self) -> Result<String> {
        debug!(command = %self.command, "spawning shell command");

        let output = tokio::process::Command::new(&self.shell.program)
            .arg(&self.shell.flag)
            .arg(&*self.command)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ShapekitError::CommandSpawn {
                command: self.command.to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            return Err(ShapekitError::CommandFailed {
                command: self.command.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                stdout,
            });
        }

        debug!(bytes = stdout.len(), "shell command finished");
        Ok(stdout)
    }
}

/// Name → command table built by [`create_shell_commands`]
#[derive(Debug, Clone, Default)]
pub struct ShellCommands {
    commands: HashMap<String, ShellCommand>,
}

impl ShellCommands {
    pub fn get(&self, name: &str) -> Option<&ShellCommand> {
        self.commands.get(name)
    }

    /// Run the command registered under `name`
    pub async fn call(&self, name: &str) -> Result<String> {
        let command = self.get(name).ok_or_else(|| ShapekitError::UnknownCommand {
            name: name.to_string(),
        })?;
        command.run().await
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build a command table from `(name, command)` pairs using the default shell.
///
/// Later pairs with a repeated name replace earlier ones.
pub fn create_shell_commands<I, N, C>(entries: I) -> ShellCommands
where
    I: IntoIterator<Item = (N, C)>,
    N: Into<String>,
    C: AsRef<str>,
{
    create_shell_commands_with(entries, ShellConfig::default())
}

/// Same as [`create_shell_commands`] with an explicit shell
pub fn create_shell_commands_with<I, N, C>(entries: I, shell: ShellConfig) -> ShellCommands
where
    I: IntoIterator<Item = (N, C)>,
    N: Into<String>,
    C: AsRef<str>,
{
    let shell = Arc::new(shell);
    let commands = entries
        .into_iter()
        .map(|(name, command)| {
            let name = name.into();
            let command = ShellCommand {
                name: Arc::from(name.as_str()),
                command: Arc::from(command.as_ref()),
                shell: Arc::clone(&shell),
            };
            (name, command)
        })
        .collect();
    ShellCommands { commands }
}
