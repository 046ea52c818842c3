//! The configuration aggregate built up by the resolver and the resolved
//! project handed to the materializer

use crate::args::CreateArgs;
use crate::error::{Error, Result};
use crate::flags::{AdvancedFeature, DbDriver, Framework, GitOption};
use crate::runtime::check::OsCheck;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static MODULE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]+(?:[/.][a-zA-Z0-9_-]+)*$").expect("module name pattern is valid")
});

/// Returns true if `name` is a valid Go module path.
/// Any number of `/` and `.` separators are allowed between segments.
pub fn validate_module_name(name: &str) -> bool {
    MODULE_NAME.is_match(name)
}

/// Project directory name: the last `/`-delimited segment of the module path
pub fn root_dir(module_name: &str) -> &str {
    module_name.rsplit('/').next().unwrap_or(module_name)
}

/// True when `path` exists as a directory holding at least one entry
pub fn dir_is_non_empty(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    let mut entries = std::fs::read_dir(path).map_err(|e| Error::io(path, e))?;
    Ok(entries.next().is_some())
}

/// Check a candidate name against the grammar and the target directory
/// under `base`. Used for both flag values and interactive input.
pub fn check_project_name(name: &str, base: &Path) -> Result<()> {
    let name = name.trim();
    if !validate_module_name(name) {
        return Err(Error::InvalidModuleName {
            name: name.to_string(),
        });
    }
    let dir = root_dir(name);
    if dir_is_non_empty(&base.join(dir))? {
        return Err(Error::DirectoryNotEmpty {
            dir: dir.to_string(),
        });
    }
    Ok(())
}

/// Partially populated choices for one invocation.
///
/// `None` means the step has not been answered yet. Once cancelled, the
/// aggregate ignores further writes and can no longer be finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    project_name: Option<String>,
    project_type: Option<Framework>,
    db_driver: Option<DbDriver>,
    advanced: bool,
    features: Option<Vec<AdvancedFeature>>,
    git: Option<GitOption>,
    cancelled: bool,
}

impl Configuration {
    /// Seed the aggregate from command-line flags.
    ///
    /// `--feature` is only read together with `--advanced`.
    pub fn from_args(args: &CreateArgs) -> Self {
        let features = if !args.advanced || args.features.is_empty() {
            None
        } else {
            let mut unique = Vec::with_capacity(args.features.len());
            for feature in &args.features {
                if !unique.contains(feature) {
                    unique.push(*feature);
                }
            }
            Some(unique)
        };

        Self {
            project_name: args
                .name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            project_type: args.framework,
            db_driver: args.driver,
            advanced: args.advanced,
            features,
            git: args.git,
            cancelled: false,
        }
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    pub fn project_type(&self) -> Option<Framework> {
        self.project_type
    }

    pub fn db_driver(&self) -> Option<DbDriver> {
        self.db_driver
    }

    /// Whether the operator asked to be prompted for advanced features
    pub fn advanced(&self) -> bool {
        self.advanced
    }

    /// Confirmed features; `Some(vec![])` is a confirmed empty set
    pub fn features(&self) -> Option<&[AdvancedFeature]> {
        self.features.as_deref()
    }

    pub fn git(&self) -> Option<GitOption> {
        self.git
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Advanced features count as resolved when advanced mode is off or
    /// an explicit set has been recorded.
    pub fn advanced_resolved(&self) -> bool {
        !self.advanced || self.features.is_some()
    }

    pub fn is_resolved(&self) -> bool {
        self.project_name.is_some()
            && self.project_type.is_some()
            && self.db_driver.is_some()
            && self.advanced_resolved()
            && self.git.is_some()
    }

    pub(crate) fn set_project_name(&mut self, name: String) {
        if !self.cancelled {
            self.project_name = Some(name);
        }
    }

    pub(crate) fn set_project_type(&mut self, framework: Framework) {
        if !self.cancelled {
            self.project_type = Some(framework);
        }
    }

    pub(crate) fn set_db_driver(&mut self, driver: DbDriver) {
        if !self.cancelled {
            self.db_driver = Some(driver);
        }
    }

    pub(crate) fn set_features(&mut self, features: Vec<AdvancedFeature>) {
        if !self.cancelled {
            self.features = Some(features);
        }
    }

    pub(crate) fn set_git(&mut self, git: GitOption) {
        if !self.cancelled {
            self.git = Some(git);
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Freeze the choices into a [`Project`] rooted under `absolute_path`.
    ///
    /// Fails on a cancelled or incomplete aggregate and re-validates the
    /// project name, so nothing invalid ever reaches the filesystem.
    pub fn finish(self, absolute_path: PathBuf) -> Result<Project> {
        if self.cancelled {
            return Err(Error::Cancelled);
        }
        let project_name = self.project_name.ok_or(Error::Unresolved("name"))?;
        let project_type = self.project_type.ok_or(Error::Unresolved("framework"))?;
        let db_driver = self.db_driver.ok_or(Error::Unresolved("driver"))?;
        let git_option = self.git.ok_or(Error::Unresolved("git"))?;
        let features = match self.features {
            Some(features) => features,
            None if !self.advanced => Vec::new(),
            None => return Err(Error::Unresolved("advanced")),
        };

        if !validate_module_name(&project_name) {
            return Err(Error::InvalidModuleName { name: project_name });
        }

        Ok(Project {
            root_dir: root_dir(&project_name).to_string(),
            project_name,
            project_type,
            db_driver,
            features,
            git_option,
            absolute_path,
            os_check: OsCheck::default(),
            advanced_templates: AdvancedTemplates::default(),
        })
    }
}

/// Snippets produced by advanced features and consumed by later templates
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdvancedTemplates {
    pub template_imports: String,
}

/// Fully resolved project. Serialized as the context of every template.
///
/// The choice fields are read-only; the materializer only fills in the
/// derived fields (`os_check`, `advanced_templates`).
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    project_name: String,
    root_dir: String,
    project_type: Framework,
    db_driver: DbDriver,
    features: Vec<AdvancedFeature>,
    git_option: GitOption,
    #[serde(skip)]
    absolute_path: PathBuf,
    pub(crate) os_check: OsCheck,
    pub(crate) advanced_templates: AdvancedTemplates,
}

impl Project {
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn root_dir(&self) -> &str {
        &self.root_dir
    }

    pub fn project_type(&self) -> Framework {
        self.project_type
    }

    pub fn db_driver(&self) -> DbDriver {
        self.db_driver
    }

    pub fn features(&self) -> &[AdvancedFeature] {
        &self.features
    }

    pub fn has_feature(&self, feature: AdvancedFeature) -> bool {
        self.features.contains(&feature)
    }

    pub fn git_option(&self) -> GitOption {
        self.git_option
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// `<absolute_path>/<root_dir>`
    pub fn project_path(&self) -> PathBuf {
        self.absolute_path.join(&self.root_dir)
    }

    pub fn os_check(&self) -> &OsCheck {
        &self.os_check
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str) -> CreateArgs {
        CreateArgs {
            name: Some(name.to_string()),
            framework: Some(Framework::Gin),
            driver: Some(DbDriver::Postgres),
            git: Some(GitOption::Skip),
            ..CreateArgs::default()
        }
    }

    #[test]
    fn test_validate_module_name() {
        assert!(validate_module_name("my-app"));
        assert!(validate_module_name("github.com/me/my_app"));
        assert!(validate_module_name("example.org/v2"));
        assert!(!validate_module_name("my app"));
        assert!(!validate_module_name(""));
        assert!(!validate_module_name("trailing/"));
        assert!(!validate_module_name("/leading"));
        assert!(!validate_module_name("double//slash"));
        assert!(!validate_module_name("bang!"));
    }

    #[test]
    fn test_root_dir_is_last_segment() {
        assert_eq!(root_dir("github.com/me/my-app"), "my-app");
        assert_eq!(root_dir("my-app"), "my-app");
        assert_eq!(root_dir("example.org"), "example.org");
    }

    #[test]
    fn test_check_project_name_directory_rules() {
        let base = tempfile::tempdir().unwrap();

        // Missing directory is fine
        assert!(check_project_name("github.com/me/fresh", base.path()).is_ok());

        // Existing but empty directory is fine
        std::fs::create_dir(base.path().join("empty")).unwrap();
        assert!(check_project_name("empty", base.path()).is_ok());

        // Existing with an entry is rejected
        std::fs::create_dir(base.path().join("taken")).unwrap();
        std::fs::write(base.path().join("taken/main.go"), "package main").unwrap();
        let err = check_project_name("github.com/me/taken", base.path()).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotEmpty { ref dir } if dir == "taken"));

        let err = check_project_name("my app", base.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidModuleName { .. }));
    }

    #[test]
    fn test_advanced_resolution_rules() {
        let mut cfg = Configuration::from_args(&args("demo"));
        assert!(cfg.advanced_resolved());
        assert!(cfg.is_resolved());

        let cfg_adv = Configuration::from_args(&CreateArgs {
            advanced: true,
            ..args("demo")
        });
        assert!(!cfg_adv.advanced_resolved());

        let cfg_flags = Configuration::from_args(&CreateArgs {
            advanced: true,
            features: vec![AdvancedFeature::Docker, AdvancedFeature::Docker],
            ..args("demo")
        });
        assert!(cfg_flags.advanced_resolved());
        assert_eq!(cfg_flags.features(), Some(&[AdvancedFeature::Docker][..]));

        cfg.set_features(Vec::new());
        assert_eq!(cfg.features(), Some(&[][..]));
    }

    #[test]
    fn test_features_need_advanced_mode() {
        let cfg = Configuration::from_args(&CreateArgs {
            features: vec![AdvancedFeature::Docker],
            ..args("demo")
        });
        assert_eq!(cfg.features(), None);
        assert!(cfg.is_resolved());

        let project = cfg.finish(PathBuf::from("/work")).unwrap();
        assert!(!project.has_feature(AdvancedFeature::Docker));
    }

    #[test]
    fn test_cancelled_configuration_is_frozen() {
        let mut cfg = Configuration::from_args(&CreateArgs::default());
        cfg.set_project_name("demo".to_string());
        cfg.cancel();
        cfg.set_project_type(Framework::Chi);

        assert!(cfg.is_cancelled());
        assert_eq!(cfg.project_type(), None);
        assert!(matches!(
            cfg.finish(PathBuf::from("/tmp")),
            Err(Error::Cancelled)
        ));
    }

    #[test]
    fn test_finish_builds_project() {
        let project = Configuration::from_args(&args("github.com/me/api"))
            .finish(PathBuf::from("/work"))
            .unwrap();

        assert_eq!(project.root_dir(), "api");
        assert_eq!(project.project_path(), PathBuf::from("/work/api"));
        assert!(project.features().is_empty());
    }

    #[test]
    fn test_finish_rejects_unresolved() {
        let cfg = Configuration::from_args(&CreateArgs {
            git: None,
            ..args("demo")
        });
        assert!(matches!(
            cfg.finish(PathBuf::from("/work")),
            Err(Error::Unresolved("git"))
        ));
    }
}
