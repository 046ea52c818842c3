//! Terminal front end built on cliclack and console
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod progress;
mod prompter;
mod prompts;

pub use progress::ProgressGuard;
pub use prompter::TermPrompter;
pub use prompts::{run, Outcome};
