//! Closed choice domains for a generated project
//!
//! Every enum doubles as a clap value (`--framework gin`) and as a template
//! value (`{% if project_type == "gin" %}`), so the kebab-case spelling is
//! the single source of truth for both.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Routing framework for the generated service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    StandardLibrary,
    Chi,
    Gin,
    Fiber,
    GorillaMux,
    HttpRouter,
    Echo,
}

impl Framework {
    pub const ALL: [Framework; 7] = [
        Framework::StandardLibrary,
        Framework::Chi,
        Framework::Gin,
        Framework::Fiber,
        Framework::GorillaMux,
        Framework::HttpRouter,
        Framework::Echo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::StandardLibrary => "standard-library",
            Framework::Chi => "chi",
            Framework::Gin => "gin",
            Framework::Fiber => "fiber",
            Framework::GorillaMux => "gorilla-mux",
            Framework::HttpRouter => "http-router",
            Framework::Echo => "echo",
        }
    }
}

/// Database driver wired into `internal/db`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DbDriver {
    Mysql,
    Postgres,
    Sqlite,
    Mongo,
    Redis,
    None,
}

impl DbDriver {
    pub const ALL: [DbDriver; 6] = [
        DbDriver::Mysql,
        DbDriver::Postgres,
        DbDriver::Sqlite,
        DbDriver::Mongo,
        DbDriver::Redis,
        DbDriver::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DbDriver::Mysql => "mysql",
            DbDriver::Postgres => "postgres",
            DbDriver::Sqlite => "sqlite",
            DbDriver::Mongo => "mongo",
            DbDriver::Redis => "redis",
            DbDriver::None => "none",
        }
    }

    /// Drivers backed by a server get their own compose file
    pub fn has_compose_service(&self) -> bool {
        !matches!(self, DbDriver::Sqlite | DbDriver::None)
    }
}

/// Optional additions toggled in advanced mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvancedFeature {
    React,
    GoProjectWorkflow,
    Websocket,
    Docker,
}

impl AdvancedFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvancedFeature::React => "react",
            AdvancedFeature::GoProjectWorkflow => "go-project-workflow",
            AdvancedFeature::Websocket => "websocket",
            AdvancedFeature::Docker => "docker",
        }
    }
}

/// What to do with version control once files are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GitOption {
    Commit,
    Stage,
    Skip,
}

impl GitOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            GitOption::Commit => "commit",
            GitOption::Stage => "stage",
            GitOption::Skip => "skip",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Framework, DbDriver, AdvancedFeature, GitOption);

/// Parse a normalized choice the same way clap parses the flag
pub fn parse_choice<T: ValueEnum>(value: &str) -> Option<T> {
    T::from_str(value, true).ok()
}
