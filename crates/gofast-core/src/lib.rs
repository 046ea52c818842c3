//! gofast-core - scaffolding engine behind the `gofast` CLI
//!
//! Generates a Go backend project from a handful of choices: routing
//! framework, database driver, optional extras and what to do with git.
//!
//! # Architecture
//!
//! - **Choices**: [`flags`], [`steps`] and [`project::Configuration`] model what
//!   can be chosen; [`resolver`] fills the gaps interactively through a
//!   [`resolver::Prompter`].
//! - **Generation**: [`templates`] holds the embedded template tables and
//!   [`materializer`] runs the ordered, fail-fast pipeline. External
//!   commands go through [`runtime::Executor`].
//! - **Front end**: [`echo`] rebuilds a reproducible command line and the
//!   optional [`tui`] module wires everything to a terminal.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based terminal front end
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use gofast_core::{Configuration, CreateArgs, Materializer, SystemExecutor};
//!
//! let args = CreateArgs { /* every flag set */ ..Default::default() };
//! let project = Configuration::from_args(&args).finish(std::env::current_dir()?)?;
//! let report = Materializer::new(project, SystemExecutor)?.run().await?;
//! ```

pub mod args;
pub mod echo;
pub mod error;
pub mod flags;
pub mod materializer;
pub mod product;
pub mod project;
pub mod resolver;
pub mod runtime;
pub mod steps;
pub mod templates;
pub mod version;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use args::CreateArgs;
pub use error::{Error, Result};
pub use flags::{AdvancedFeature, DbDriver, Framework, GitOption};
pub use materializer::{Materializer, Report};
pub use product::{Gofast, ProductConfig};
pub use project::{Configuration, Project};
pub use runtime::{Executor, SystemExecutor};

#[cfg(feature = "tui")]
pub use tui::run;
