//! Error types for project resolution and materialization

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using gofast-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving choices or materializing a project
#[derive(Error, Debug)]
pub enum Error {
    /// Project name does not satisfy the Go module grammar
    #[error("'{name}' is not a valid module name. Please choose a different name")]
    InvalidModuleName { name: String },

    /// Target root directory already holds files
    #[error("directory '{dir}' already exists and is not empty. Please choose a different name")]
    DirectoryNotEmpty { dir: String },

    /// Git identity key is not configured
    #[error("{key} is not set in git config. Please set up git config before trying again")]
    GitIdentityMissing { key: String },

    /// A required external tool is not on PATH
    #[error("{tool} is not installed")]
    ToolMissing { tool: String },

    /// External command ran and exited unsuccessfully
    #[error("`{command}` failed ({status})\n{stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// External command could not be started at all
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Template rendering failed
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    /// Filesystem operation failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal interaction failed
    #[error("interactive prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    /// A choice was still missing when the configuration was finalized
    #[error("the {0} step has not been resolved")]
    Unresolved(&'static str),

    /// The operator aborted one of the interactive steps
    #[error("project creation was cancelled")]
    Cancelled,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
