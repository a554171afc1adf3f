//! YAML configuration
//!
//! ```yaml
//! shell:
//!   program: bash
//!   flag: -c
//! load:
//!   encoding: latin1
//!   flag: r
//! commands:
//!   - greet: echo hello
//!   - today: date +%F
//! ```
//!
//! Every section is optional.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ShapekitError};
use crate::loader::LoadOptions;
use crate::shell::{create_shell_commands_with, ShellCommands, ShellConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub shell: ShellConfig,
    pub load: LoadOptions,
    /// Ordered list of `name: command` mappings
    pub commands: Vec<BTreeMap<String, String>>,
}

impl ToolkitConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ShapekitError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        debug!(path = %path.display(), commands = config.commands.len(), "loaded config");
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|source| ShapekitError::Config {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Build the command table with the configured shell.
    ///
    /// Every entry of every mapping is registered, in list order; a name
    /// that appears twice keeps its last command.
    pub fn shell_commands(&self) -> ShellCommands {
        let entries = self
            .commands
            .iter()
            .flat_map(|mapping| mapping.iter())
            .map(|(name, command)| (name.clone(), command.as_str()));
        create_shell_commands_with(entries, self.shell.clone())
    }
}
