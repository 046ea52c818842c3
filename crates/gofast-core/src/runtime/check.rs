//! Host detection: operating system family and the toolchains a
//! generated project needs

use anyhow::Result;
use serde::Serialize;
use std::process::Command;

/// Operating system flags exposed to templates as `os_check`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OsCheck {
    pub unix_based: bool,
    pub linux: bool,
    pub darwin: bool,
}

impl OsCheck {
    /// Flags for the operating system this binary was built for
    pub fn detect() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// Flags for a `std::env::consts::OS` style name
    pub fn for_os(os: &str) -> Self {
        Self {
            unix_based: os != "windows",
            linux: os == "linux",
            darwin: os == "macos",
        }
    }
}

/// Toolchain detection result
#[derive(Debug, Clone)]
pub struct ToolchainInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, program: &str, args: &[&str]) -> ToolchainInfo {
    let output = Command::new(program).args(args).output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolchainInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolchainInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if the Go toolchain is available
pub fn check_go() -> ToolchainInfo {
    probe("Go", "go", &["version"])
}

/// Check if npm is available
pub fn check_npm() -> ToolchainInfo {
    probe("npm", "npm", &["--version"])
}

/// Check if git is available
pub fn check_git() -> ToolchainInfo {
    probe("Git", "git", &["--version"])
}

/// What a project needs installed before materialization starts
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolchainNeeds {
    pub git: bool,
    pub npm: bool,
}

/// Check toolchains, failing with install hints for anything missing
pub fn check_toolchains(needs: ToolchainNeeds) -> Result<Vec<ToolchainInfo>> {
    check_toolchains_with(needs, check_go, check_git, check_npm)
}

fn check_toolchains_with(
    needs: ToolchainNeeds,
    go: impl Fn() -> ToolchainInfo,
    git: impl Fn() -> ToolchainInfo,
    npm: impl Fn() -> ToolchainInfo,
) -> Result<Vec<ToolchainInfo>> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    let go = go();
    if go.available {
        results.push(go);
    } else {
        missing.push("Go (install from https://go.dev/dl)");
    }

    if needs.git {
        let git = git();
        if git.available {
            results.push(git);
        } else {
            missing.push("Git (install from https://git-scm.com/downloads)");
        }
    }

    if needs.npm {
        let npm = npm();
        if npm.available {
            results.push(npm);
        } else {
            missing.push("npm (install Node.js from https://nodejs.org)");
        }
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required toolchains:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}
