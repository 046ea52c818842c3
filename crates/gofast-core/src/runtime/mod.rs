//! Host detection and external command plumbing
//!
//! This module provides:
//! - Operating system and toolchain detection
//! - The [`Executor`] seam for subprocesses
//! - Go and git command wrappers used by the materializer

pub mod check;
pub mod exec;
pub mod git;
pub mod gocmd;

pub use check::{check_toolchains, OsCheck, ToolchainInfo, ToolchainNeeds};
pub use exec::{Completion, Executor, Invocation, SystemExecutor};
