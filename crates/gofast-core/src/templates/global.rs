//! Templates every project gets

use super::Blob;

/// Loads `.env` at startup in generated code
pub const ENV_LOADER_PACKAGE: &str = "github.com/joho/godotenv";

pub const ENV: Blob = blob!("global/env.tmpl");
pub const MAKEFILE: Blob = blob!("global/Makefile.tmpl");
pub const README: Blob = blob!("global/README.md.tmpl");
pub const GITIGNORE: Blob = blob!("global/gitignore.tmpl");
pub const AIR_TOML: Blob = blob!("global/air.toml.tmpl");
