//! Product identity for the CLI binary
//!
//! The core never hard-codes the binary name: the echoed command, the
//! intro banner and the closing hints all come from a [`ProductConfig`].

use crate::project::Project;
use std::path::Path;

pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Binary name, used as the first word of the echoed command
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Instructions shown after a project was created in `dir`
    fn next_steps(&self, dir: &Path, project: &Project) -> Vec<String>;
}

/// The `gofast` binary
#[derive(Debug, Clone, Copy, Default)]
pub struct Gofast;

impl ProductConfig for Gofast {
    fn name(&self) -> &'static str {
        "gofast"
    }

    fn display_name(&self) -> &'static str {
        "Go Fast"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/mahibulhaque/gofast"
    }

    fn cli_description(&self) -> &'static str {
        "Spin up a Go backend project with the framework, driver and extras of your choice"
    }

    fn next_steps(&self, dir: &Path, project: &Project) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        if project.has_feature(crate::flags::AdvancedFeature::React) {
            steps.push("cd frontend && npm install && cd ..".to_string());
        }

        steps.push("make run".to_string());
        steps
    }
}
