//! Shapekit - small data-shape toolkit
//!
//! Independent, stateless helpers:
//! - `dispatch`: value-keyed case tables with a fallback
//! - `delay`: unit-aware async sleep
//! - `loader`: JSON file loading with optional post-processing
//! - `shell`: named shell commands as reusable async callables
//! - `walk`, `dedup`, `insert`: small sequence/object helpers
//! - `transcode`, `filter`: recursive conversions over `serde_json::Value`

pub mod config;
pub mod dedup;
pub mod delay;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod insert;
pub mod loader;
pub mod shell;
pub mod transcode;
pub mod walk;

pub use config::ToolkitConfig;
pub use dedup::{remove_duplicates, SameValue};
pub use delay::{duration_for, wait, wait_for, TimeUnit};
pub use dispatch::{select, Cases, Handler};
pub use error::{FixSuggestion, Result, ShapekitError};
pub use filter::{filter_array, TypeTag};
pub use insert::insert_at;
pub use loader::{
    file_to_json, file_to_json_with, file_to_typed, Encoding, LoadOptions, Processed, ReadFlag,
};
pub use shell::{
    create_shell_commands, create_shell_commands_with, ShellCommand, ShellCommands, ShellConfig,
};
pub use transcode::{array_to_object, object_to_array};
pub use walk::for_each_in_object;
