//! Fixed catalog of interactive steps

/// Choice domains asked for in list form, in resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Framework,
    Driver,
    Advanced,
    Git,
}

/// One entry of a step's option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOption {
    pub label: &'static str,
    pub description: &'static str,
    /// Flag spelling when it differs from the label
    pub flag: Option<&'static str>,
}

impl StepOption {
    const fn new(label: &'static str, description: &'static str) -> Self {
        Self {
            label,
            description,
            flag: None,
        }
    }

    const fn with_flag(label: &'static str, flag: &'static str, description: &'static str) -> Self {
        Self {
            label,
            description,
            flag: Some(flag),
        }
    }

    /// Normalized (lower-cased) value written back into the configuration
    pub fn value(&self) -> String {
        self.flag.unwrap_or(self.label).to_lowercase()
    }
}

/// A single interactive decision point
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub kind: StepKind,
    pub name: &'static str,
    pub prompt: &'static str,
    pub options: &'static [StepOption],
    pub multi: bool,
}

/// Prompt shown for the free-text project name
pub const NAME_PROMPT: &str = "What is the name of your project?";

const FRAMEWORK_OPTIONS: &[StepOption] = &[
    StepOption::new("Standard-Library", "The built-in Go standard library"),
    StepOption::new(
        "Chi",
        "A lightweight, idiomatic and composable router for building Go HTTP services",
    ),
    StepOption::new(
        "Gin",
        "Features a martini-like API with performance that is up to 40 times faster thanks to httprouter",
    ),
    StepOption::new("Fiber", "An Express inspired web framework built on top of Fasthttp"),
    StepOption::with_flag(
        "Gorilla/Mux",
        "Gorilla-Mux",
        "Package gorilla/mux implements a request router and dispatcher for matching incoming requests to their respective handler",
    ),
    StepOption::with_flag(
        "HttpRouter",
        "Http-Router",
        "HttpRouter is a lightweight high performance HTTP request router for Go",
    ),
    StepOption::new("Echo", "High performance, extensible, minimalist Go web framework"),
];

const DRIVER_OPTIONS: &[StepOption] = &[
    StepOption::new("Mysql", "MySQL-Driver for Go's database/sql package"),
    StepOption::new("Postgres", "Go postgres driver for Go's database/sql package"),
    StepOption::new(
        "Sqlite",
        "sqlite3 driver conforming to the built-in database/sql interface",
    ),
    StepOption::new("Mongo", "The MongoDB supported driver for Go."),
    StepOption::new("Redis", "Redis driver for Go."),
    StepOption::new(
        "None",
        "Choose this option if you don't wish to install a specific database driver.",
    ),
];

const ADVANCED_OPTIONS: &[StepOption] = &[
    StepOption::with_flag(
        "React",
        "React",
        "Use Vite to spin up a React project in TypeScript.",
    ),
    StepOption::with_flag(
        "Go Project Workflow",
        "Go-Project-Workflow",
        "Workflow templates for testing, cross-compiling and releasing Go projects",
    ),
    StepOption::with_flag("Websocket endpoint", "Websocket", "Add a websocket endpoint"),
    StepOption::with_flag(
        "Docker",
        "Docker",
        "Dockerfile and docker-compose generic configuration for go project",
    ),
];

const GIT_OPTIONS: &[StepOption] = &[
    StepOption::new(
        "Commit",
        "Initialize a new git repository and commit all the changes",
    ),
    StepOption::new(
        "Stage",
        "Initialize a new git repository but only stage the changes",
    ),
    StepOption::new("Skip", "Proceed without initializing a git repository"),
];

/// Every list step, in the order the resolver walks them
pub static STEPS: [Step; 4] = [
    Step {
        kind: StepKind::Framework,
        name: "Go Project Framework",
        prompt: "What framework do you want to use in your Go project?",
        options: FRAMEWORK_OPTIONS,
        multi: false,
    },
    Step {
        kind: StepKind::Driver,
        name: "Go Project Database Driver",
        prompt: "What database driver do you want to use in your Go project?",
        options: DRIVER_OPTIONS,
        multi: false,
    },
    Step {
        kind: StepKind::Advanced,
        name: "Advanced Features",
        prompt: "Which advanced features do you want?",
        options: ADVANCED_OPTIONS,
        multi: true,
    },
    Step {
        kind: StepKind::Git,
        name: "Git Repository",
        prompt: "Which git option would you like to select for your project?",
        options: GIT_OPTIONS,
        multi: false,
    },
];

/// Look up the catalog entry for a step kind
pub fn step(kind: StepKind) -> &'static Step {
    match kind {
        StepKind::Framework => &STEPS[0],
        StepKind::Driver => &STEPS[1],
        StepKind::Advanced => &STEPS[2],
        StepKind::Git => &STEPS[3],
    }
}
