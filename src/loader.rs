//! JSON file loader
//!
//! Reads a whole file synchronously, decodes it with the configured text
//! encoding and parses it as JSON. An optional processor receives the parsed
//! value; whatever it returns (including an un-awaited future) is handed back
//! as-is.

use std::fmt;
use std::fs::OpenOptions;
use std::future::Future;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use futures::future::BoxFuture;
use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ShapekitError};

/// Text encoding used to decode file bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Encoding {
    /// Strict UTF-8; invalid sequences are an `InvalidData` read error
    #[default]
    Utf8,
    /// ISO-8859-1: each byte is one char
    Latin1,
}

impl Encoding {
    fn decode(self, bytes: Vec<u8>) -> io::Result<String> {
        match self {
            Encoding::Utf8 => {
                String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            }
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl FromStr for Encoding {
    type Err = ShapekitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "latin1" | "binary" | "iso-8859-1" => Ok(Encoding::Latin1),
            _ => Err(ShapekitError::UnknownEncoding { name: s.to_string() }),
        }
    }
}

impl TryFrom<String> for Encoding {
    type Error = ShapekitError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Encoding> for String {
    fn from(value: Encoding) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("utf8"),
            Encoding::Latin1 => f.write_str("latin1"),
        }
    }
}

/// Mode the file is opened with before reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReadFlag {
    /// `r`: read-only
    #[default]
    Read,
    /// `r+`: read-write, so the open fails on read-only files
    ReadWrite,
}

impl FromStr for ReadFlag {
    type Err = ShapekitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "r" => Ok(ReadFlag::Read),
            "r+" => Ok(ReadFlag::ReadWrite),
            _ => Err(ShapekitError::UnknownReadFlag { flag: s.to_string() }),
        }
    }
}

impl TryFrom<String> for ReadFlag {
    type Error = ShapekitError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ReadFlag> for String {
    fn from(value: ReadFlag) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ReadFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadFlag::Read => f.write_str("r"),
            ReadFlag::ReadWrite => f.write_str("r+"),
        }
    }
}

/// Options for [`file_to_json`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub encoding: Encoding,
    pub flag: ReadFlag,
}

impl LoadOptions {
    pub fn new(encoding: Encoding, flag: ReadFlag) -> Self {
        Self { encoding, flag }
    }
}

/// Either an immediate value or a future that will produce one
pub enum Processed<T> {
    Ready(T),
    Pending(BoxFuture<'static, T>),
}

impl<T> Processed<T> {
    pub fn ready(value: T) -> Self {
        Processed::Ready(value)
    }

    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Processed::Pending(future.boxed())
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Processed::Ready(_))
    }

    /// Wait for the value, returning immediately when already ready
    pub async fn resolve(self) -> T {
        match self {
            Processed::Ready(value) => value,
            Processed::Pending(future) => future.await,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Processed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Processed::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Processed::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

fn read_text(path: &Path, options: &LoadOptions) -> Result<String> {
    let access = |source: io::Error| ShapekitError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .read(true)
        .write(options.flag == ReadFlag::ReadWrite)
        .open(path)
        .map_err(access)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(access)?;

    debug!(
        path = %path.display(),
        encoding = %options.encoding,
        bytes = bytes.len(),
        "read file"
    );

    options.encoding.decode(bytes).map_err(access)
}

/// Read and parse a JSON file. Blocks the calling thread.
pub fn file_to_json(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Value> {
    file_to_typed(path, options)
}

/// Read, parse, then hand the value to `process`.
///
/// The processor's result is returned untouched: a processor returning a
/// future yields that future, not its output. Use [`Processed`] when one
/// processor needs to return either kind.
pub fn file_to_json_with<R, F>(path: impl AsRef<Path>, options: &LoadOptions, process: F) -> Result<R>
where
    F: FnOnce(Value) -> R,
{
    file_to_json(path, options).map(process)
}

/// Read a JSON file straight into a typed value
pub fn file_to_typed<T: DeserializeOwned>(path: impl AsRef<Path>, options: &LoadOptions) -> Result<T> {
    let path = path.as_ref();
    let text = read_text(path, options)?;
    serde_json::from_str(&text).map_err(|source| ShapekitError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
