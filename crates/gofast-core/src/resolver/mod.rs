//! Interactive choice resolution
//!
//! Walks the steps in fixed order (name, framework, driver, advanced
//! features, git) and asks only for what the flags left open. A cancel at
//! any step marks the configuration cancelled and stops immediately.

pub mod select;

use crate::error::{Error, Result};
use crate::flags::{parse_choice, AdvancedFeature};
use crate::project::{check_project_name, Configuration};
use crate::steps::{step, Step, StepKind, NAME_PROMPT};
use clap::ValueEnum;
use std::io;
use std::path::PathBuf;
use tracing::debug;

pub use select::{MultiSelect, Nav, SingleSelect};

/// Outcome of one interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Confirmed(T),
    Cancelled,
}

/// Validation hook for free-text input; `Err` carries the message to show
pub type Validator = Box<dyn Fn(&str) -> std::result::Result<(), String>>;

/// Presentation surface the resolver talks to.
///
/// Each call blocks until the operator confirms or cancels.
pub trait Prompter {
    /// Ask for free text, re-prompting while `validate` rejects it
    fn input(&mut self, prompt: &str, validate: Validator) -> io::Result<Selection<String>>;

    /// Pick one option of `step`, returning its index
    fn select(&mut self, step: &Step) -> io::Result<Selection<usize>>;

    /// Pick any subset of `step`'s options, returning indices in toggle order
    fn multi_select(&mut self, step: &Step) -> io::Result<Selection<Vec<usize>>>;
}

/// Result of a resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Every step has a value; `interactive` is true if any prompt was shown
    Resolved { interactive: bool },
    Cancelled,
}

/// Fills the open fields of a [`Configuration`] through a [`Prompter`]
pub struct Resolver<'p, P: Prompter> {
    prompter: &'p mut P,
    base_dir: PathBuf,
}

impl<'p, P: Prompter> Resolver<'p, P> {
    /// `base_dir` is where the project root will be created
    pub fn new(prompter: &'p mut P, base_dir: PathBuf) -> Self {
        Self { prompter, base_dir }
    }

    pub fn resolve(&mut self, config: &mut Configuration) -> Result<Resolution> {
        let mut interactive = false;

        match config.project_name() {
            Some(name) => check_project_name(name, &self.base_dir)?,
            None => {
                interactive = true;
                match self.ask_name()? {
                    Selection::Confirmed(name) => config.set_project_name(name),
                    Selection::Cancelled => return Ok(cancel(config)),
                }
            }
        }

        if config.project_type().is_none() {
            interactive = true;
            match self.ask_one(StepKind::Framework)? {
                Selection::Confirmed(framework) => config.set_project_type(framework),
                Selection::Cancelled => return Ok(cancel(config)),
            }
        }

        if config.db_driver().is_none() {
            interactive = true;
            match self.ask_one(StepKind::Driver)? {
                Selection::Confirmed(driver) => config.set_db_driver(driver),
                Selection::Cancelled => return Ok(cancel(config)),
            }
        }

        if !config.advanced_resolved() {
            interactive = true;
            match self.ask_features()? {
                Selection::Confirmed(features) => config.set_features(features),
                Selection::Cancelled => return Ok(cancel(config)),
            }
        }

        if config.git().is_none() {
            interactive = true;
            match self.ask_one(StepKind::Git)? {
                Selection::Confirmed(git) => config.set_git(git),
                Selection::Cancelled => return Ok(cancel(config)),
            }
        }

        debug!(?config, interactive, "configuration resolved");
        Ok(Resolution::Resolved { interactive })
    }

    fn ask_name(&mut self) -> Result<Selection<String>> {
        let base = self.base_dir.clone();
        let validate: Validator =
            Box::new(move |input| check_project_name(input, &base).map_err(|e| e.to_string()));

        match self
            .prompter
            .input(NAME_PROMPT, validate)
            .map_err(Error::Prompt)?
        {
            Selection::Confirmed(name) => {
                let name = name.trim().to_string();
                // The prompt validated already; never trust it with the filesystem
                check_project_name(&name, &self.base_dir)?;
                Ok(Selection::Confirmed(name))
            }
            Selection::Cancelled => Ok(Selection::Cancelled),
        }
    }

    fn ask_one<T: ValueEnum>(&mut self, kind: StepKind) -> Result<Selection<T>> {
        let step = step(kind);
        match self.prompter.select(step).map_err(Error::Prompt)? {
            Selection::Confirmed(index) => {
                let value = step
                    .options
                    .get(index)
                    .and_then(|option| parse_choice(&option.value()))
                    .ok_or(Error::Unresolved(step.name))?;
                debug!(step = step.name, index, "option confirmed");
                Ok(Selection::Confirmed(value))
            }
            Selection::Cancelled => Ok(Selection::Cancelled),
        }
    }

    fn ask_features(&mut self) -> Result<Selection<Vec<AdvancedFeature>>> {
        let step = step(StepKind::Advanced);
        match self.prompter.multi_select(step).map_err(Error::Prompt)? {
            Selection::Confirmed(indices) => {
                let mut features = Vec::with_capacity(indices.len());
                for index in indices {
                    let feature = step
                        .options
                        .get(index)
                        .and_then(|option| parse_choice(&option.value()))
                        .ok_or(Error::Unresolved(step.name))?;
                    if !features.contains(&feature) {
                        features.push(feature);
                    }
                }
                debug!(?features, "advanced features confirmed");
                Ok(Selection::Confirmed(features))
            }
            Selection::Cancelled => Ok(Selection::Cancelled),
        }
    }
}

fn cancel(config: &mut Configuration) -> Resolution {
    debug!("resolution cancelled by operator");
    config.cancel();
    Resolution::Cancelled
}
