//! External command execution
//!
//! Every subprocess the materializer runs goes through [`Executor`], so the
//! pipeline can be driven against a fake in tests. Failures are reported as
//! one diagnostic: the exit status plus whatever the command wrote to stderr.

use crate::error::{Error, Result};
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// A command line to run, optionally inside a working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.dir = Some(dir.to_path_buf());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a finished command exited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// `None` when terminated by a signal
    pub code: Option<i32>,
    pub stderr: String,
}

impl Completion {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub(crate) fn status(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external commands to completion. There is no cancellation: a
/// started command is always awaited.
pub trait Executor: Send + Sync + 'static {
    fn execute(
        &self,
        invocation: Invocation,
    ) -> impl Future<Output = std::io::Result<Completion>> + Send;
}

/// Executor backed by real subprocesses
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn execute(
        &self,
        invocation: Invocation,
    ) -> impl Future<Output = std::io::Result<Completion>> + Send {
        async move {
            let mut cmd = Command::new(&invocation.program);
            cmd.args(&invocation.args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
            if let Some(dir) = &invocation.dir {
                cmd.current_dir(dir);
            }

            let output = cmd.output().await?;
            Ok(Completion {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// Run a command and turn any failure into [`Error::CommandFailed`]
pub async fn run_checked<E: Executor>(executor: &E, invocation: Invocation) -> Result<()> {
    let command = invocation.to_string();
    debug!(%command, dir = ?invocation.dir, "running");

    let completion = executor
        .execute(invocation)
        .await
        .map_err(|source| Error::Spawn {
            command: command.clone(),
            source,
        })?;

    if completion.success() {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            status: completion.status(),
            command,
            stderr: completion.stderr,
        })
    }
}

/// True if `program` starts and exits successfully with `probe_arg`
pub async fn is_available<E: Executor>(executor: &E, program: &str, probe_arg: &str) -> bool {
    executor
        .execute(Invocation::new(program).arg(probe_arg))
        .await
        .map(|c| c.success())
        .unwrap_or(false)
}
