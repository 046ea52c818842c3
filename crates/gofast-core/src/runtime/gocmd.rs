//! Go toolchain commands run inside the generated project

use super::exec::{run_checked, Executor, Invocation};
use crate::error::Result;
use std::path::Path;

/// `go mod init <module>`
pub async fn init_mod<E: Executor>(executor: &E, module: &str, dir: &Path) -> Result<()> {
    run_checked(
        executor,
        Invocation::new("go").args(["mod", "init", module]).current_dir(dir),
    )
    .await
}

/// `go get -u <package>` for each package, stopping at the first failure
pub async fn get_packages<E: Executor>(executor: &E, dir: &Path, packages: &[&str]) -> Result<()> {
    for package in packages {
        run_checked(
            executor,
            Invocation::new("go")
                .args(["get", "-u", *package])
                .current_dir(dir),
        )
        .await?;
    }
    Ok(())
}

/// `go mod tidy`
pub async fn tidy<E: Executor>(executor: &E, dir: &Path) -> Result<()> {
    run_checked(
        executor,
        Invocation::new("go").args(["mod", "tidy"]).current_dir(dir),
    )
    .await
}

/// `gofmt -s -w .` over the whole tree
pub async fn fmt<E: Executor>(executor: &E, dir: &Path) -> Result<()> {
    run_checked(
        executor,
        Invocation::new("gofmt").args(["-s", "-w", "."]).current_dir(dir),
    )
    .await
}
