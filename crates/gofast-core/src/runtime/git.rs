//! Git identity checks and repository initialization

use super::exec::{run_checked, Executor, Invocation};
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Whether `git config --get <key>` yields a value.
///
/// Exit code 1 means the key is unset; any other failure is an error.
pub async fn config_is_set<E: Executor>(executor: &E, key: &str) -> Result<bool> {
    let invocation = Invocation::new("git").args(["config", "--get", key]);
    let command = invocation.to_string();

    let completion = executor
        .execute(invocation)
        .await
        .map_err(|source| Error::Spawn {
            command: command.clone(),
            source,
        })?;

    match completion.code {
        Some(0) => Ok(true),
        Some(1) => Ok(false),
        _ => Err(Error::CommandFailed {
            command,
            status: completion.status(),
            stderr: completion.stderr,
        }),
    }
}

/// Fail with [`Error::GitIdentityMissing`] unless `key` is configured
pub async fn require_identity<E: Executor>(executor: &E, key: &str) -> Result<()> {
    if config_is_set(executor, key).await? {
        debug!(key, "git identity present");
        Ok(())
    } else {
        Err(Error::GitIdentityMissing {
            key: key.to_string(),
        })
    }
}

/// `git init` followed by `git add .`
pub async fn init_and_stage<E: Executor>(executor: &E, dir: &Path) -> Result<()> {
    run_checked(executor, Invocation::new("git").arg("init").current_dir(dir)).await?;
    run_checked(
        executor,
        Invocation::new("git").args(["add", "."]).current_dir(dir),
    )
    .await
}

/// `git commit -m "Initial commit"`
pub async fn initial_commit<E: Executor>(executor: &E, dir: &Path) -> Result<()> {
    run_checked(
        executor,
        Invocation::new("git")
            .args(["commit", "-m", "Initial commit"])
            .current_dir(dir),
    )
    .await
}
