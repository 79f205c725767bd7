//! Units of work and their declared outputs

use crate::error::{ActionError, ExecutionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Kind of filesystem location an output property declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputType {
    /// The root is a directory the action writes into
    Directory,

    /// The root is a single file the action writes
    File,
}

impl FromStr for OutputType {
    type Err = ExecutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "directory" | "dir" => Ok(Self::Directory),
            "file" => Ok(Self::File),
            _ => Err(ExecutionError::InvalidOutputType(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputType {
    type Error = ExecutionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutputType> for String {
    fn from(value: OutputType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// A named, typed output declared by a unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFileProperty {
    /// Property name (e.g., "destinationDir")
    pub name: String,

    /// Whether the roots are directories or files
    pub output_type: OutputType,

    /// Output locations; `None` means no value is configured for this run
    #[serde(default)]
    pub roots: Vec<Option<PathBuf>>,
}

impl OutputFileProperty {
    /// Create a property with the given roots
    pub fn new(
        name: impl Into<String>,
        output_type: OutputType,
        roots: impl IntoIterator<Item = Option<PathBuf>>,
    ) -> Self {
        Self {
            name: name.into(),
            output_type,
            roots: roots.into_iter().collect(),
        }
    }

    /// Directory output with a single root
    pub fn directory(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self::new(name, OutputType::Directory, [Some(root.into())])
    }

    /// File output with a single root
    pub fn file(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self::new(name, OutputType::File, [Some(root.into())])
    }
}

/// Configured description of one buildable action and its outputs
///
/// Implementations are read-only for the duration of an execution attempt.
pub trait UnitOfWork: Send + Sync {
    /// Name used in diagnostics (e.g., "busybox:do_compile")
    fn display_name(&self) -> String;

    /// Output properties declared by this work
    fn outputs(&self) -> &[OutputFileProperty];

    /// Run the action.
    ///
    /// Returns whether the action did any work.
    ///
    /// # Errors
    ///
    /// Any error is captured by the terminal step as the failure cause.
    fn execute(&self) -> Result<bool, ActionError>;
}
