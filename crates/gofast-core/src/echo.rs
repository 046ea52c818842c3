//! Reproducible command line for a resolved configuration
//!
//! Flags are walked in the order `create` declares them, so the echoed
//! command is stable across runs and can be pasted back verbatim.

use crate::args::CreateArgs;
use crate::project::Configuration;
use clap::{Args, Command};
use std::collections::HashMap;

/// Value carried by one flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Text(String),
    /// Echoed bare when true, omitted when false
    Bool(bool),
    /// One `--flag value` pair per entry, in order
    List(Vec<String>),
}

/// Flag values keyed by argument id
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    values: HashMap<&'static str, FlagValue>,
}

impl FlagSet {
    pub fn set(&mut self, id: &'static str, value: FlagValue) {
        self.values.insert(id, value);
    }

    pub fn get(&self, id: &str) -> Option<&FlagValue> {
        self.values.get(id)
    }

    /// Snapshot of everything `config` has resolved
    pub fn from_configuration(config: &Configuration) -> Self {
        let mut flags = Self::default();
        if let Some(name) = config.project_name() {
            flags.set("name", FlagValue::Text(name.to_string()));
        }
        if let Some(framework) = config.project_type() {
            flags.set("framework", FlagValue::Text(framework.as_str().to_string()));
        }
        if let Some(driver) = config.db_driver() {
            flags.set("driver", FlagValue::Text(driver.as_str().to_string()));
        }

        // An empty confirmed set reproduces as "advanced mode off"
        let features = config.features().unwrap_or_default();
        flags.set("advanced", FlagValue::Bool(!features.is_empty()));
        flags.set(
            "features",
            FlagValue::List(features.iter().map(|f| f.as_str().to_string()).collect()),
        );

        if let Some(git) = config.git() {
            flags.set("git", FlagValue::Text(git.as_str().to_string()));
        }
        flags
    }
}

/// `<program> <subcommand> --flag value ...` for every set flag of `create`
pub fn non_interactive_command(program: &str, subcommand: &'static str, flags: &FlagSet) -> String {
    let command = CreateArgs::augment_args(Command::new(subcommand));
    let mut parts = vec![program.to_string(), subcommand.to_string()];

    for arg in command.get_arguments() {
        let Some(long) = arg.get_long() else {
            continue;
        };
        if long == "help" {
            continue;
        }
        match flags.get(arg.get_id().as_str()) {
            Some(FlagValue::Text(value)) => {
                parts.push(format!("--{long}"));
                parts.push(value.clone());
            }
            Some(FlagValue::Bool(true)) => parts.push(format!("--{long}")),
            Some(FlagValue::List(values)) => {
                for value in values {
                    parts.push(format!("--{long}"));
                    parts.push(value.clone());
                }
            }
            Some(FlagValue::Bool(false)) | None => {}
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{AdvancedFeature, DbDriver, Framework, GitOption};
    use crate::resolver::tests::{Answer, ScriptedPrompter};
    use crate::resolver::{Resolution, Resolver};
    use clap::{Parser, Subcommand};

    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Sub,
    }

    #[derive(Subcommand)]
    enum Sub {
        Create(CreateArgs),
    }

    fn reparse(line: &str) -> CreateArgs {
        let Sub::Create(args) = Cli::try_parse_from(line.split_whitespace())
            .unwrap()
            .command;
        args
    }

    #[test]
    fn test_echoed_command_resolves_without_prompts() {
        let dir = tempfile::tempdir().unwrap();
        // gin, postgres, websocket, commit
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Text("github.com/acme/shop"),
            Answer::Pick(2),
            Answer::Pick(1),
            Answer::Picks(vec![2]),
            Answer::Pick(0),
        ]);
        let mut config = Configuration::from_args(&CreateArgs {
            advanced: true,
            ..CreateArgs::default()
        });
        Resolver::new(&mut prompter, dir.path().to_path_buf())
            .resolve(&mut config)
            .unwrap();

        let line = non_interactive_command("gofast", "create", &FlagSet::from_configuration(&config));
        assert_eq!(
            line,
            "gofast create --name github.com/acme/shop --framework gin --driver postgres \
             --advanced --feature websocket --git commit"
        );

        let mut silent = ScriptedPrompter::new(vec![]);
        let mut replay = Configuration::from_args(&reparse(&line));
        let resolution = Resolver::new(&mut silent, dir.path().to_path_buf())
            .resolve(&mut replay)
            .unwrap();

        assert_eq!(resolution, Resolution::Resolved { interactive: false });
        assert!(silent.asked.is_empty());
        assert_eq!(replay.project_name(), config.project_name());
        assert_eq!(replay.project_type(), Some(Framework::Gin));
        assert_eq!(replay.db_driver(), Some(DbDriver::Postgres));
        assert_eq!(replay.features(), Some(&[AdvancedFeature::Websocket][..]));
        assert_eq!(replay.git(), Some(GitOption::Commit));
    }

    #[test]
    fn test_false_bool_is_omitted() {
        let config = Configuration::from_args(&CreateArgs {
            name: Some("demo".to_string()),
            framework: Some(Framework::Chi),
            driver: Some(DbDriver::None),
            git: Some(GitOption::Skip),
            ..CreateArgs::default()
        });

        let line = non_interactive_command("gofast", "create", &FlagSet::from_configuration(&config));

        assert_eq!(
            line,
            "gofast create --name demo --framework chi --driver none --git skip"
        );
    }

    #[test]
    fn test_features_keep_confirmation_order() {
        let mut flags = FlagSet::default();
        flags.set("advanced", FlagValue::Bool(true));
        flags.set(
            "features",
            FlagValue::List(vec!["docker".to_string(), "websocket".to_string()]),
        );

        let line = non_interactive_command("gofast", "create", &flags);

        assert_eq!(
            line,
            "gofast create --advanced --feature docker --feature websocket"
        );
    }

    #[test]
    fn test_confirmed_empty_feature_set_round_trips() {
        let mut config = Configuration::from_args(&CreateArgs {
            name: Some("demo".to_string()),
            framework: Some(Framework::HttpRouter),
            driver: Some(DbDriver::Sqlite),
            advanced: true,
            git: Some(GitOption::Stage),
            ..CreateArgs::default()
        });
        config.set_features(Vec::new());

        let line = non_interactive_command("gofast", "create", &FlagSet::from_configuration(&config));
        assert!(!line.contains("--advanced"));
        assert!(line.contains("--framework http-router"));

        let replay = Configuration::from_args(&reparse(&line));
        assert!(replay.is_resolved());
    }
}
