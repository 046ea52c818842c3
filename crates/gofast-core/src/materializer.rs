//! Project materialization
//!
//! Turns a resolved [`Project`] into a directory tree plus the Go, npm and
//! git side effects that make it buildable. Effects run strictly in order
//! and the first failure aborts everything after it. Nothing is rolled
//! back: a failure halfway leaves the files written so far on disk.

use crate::error::{Error, Result};
use crate::flags::{AdvancedFeature, Framework, GitOption};
use crate::project::{dir_is_non_empty, Project};
use crate::runtime::exec::{is_available, run_checked};
use crate::runtime::{git, gocmd, Executor, Invocation, OsCheck};
use crate::templates::{
    advanced, driver_templates, framework_templates, global, Blob, TemplateRenderer,
};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

const DB_DIR: &str = "internal/db";
const SERVER_DIR: &str = "internal/server";
const CMD_DIR: &str = "cmd/api";
const WORKFLOW_DIR: &str = ".github/workflows";
const FRONTEND_DIR: &str = "frontend";

/// Backend port handed to the frontend when `.env` has no `PORT=` line
const DEFAULT_PORT: &str = "8080";

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct Report {
    pub project_path: PathBuf,
    /// Files written, relative to `project_path`, in write order
    pub files: Vec<PathBuf>,
}

/// Runs the generation pipeline for one project
pub struct Materializer<E: Executor> {
    project: Project,
    executor: E,
    renderer: TemplateRenderer,
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl<E: Executor> Materializer<E> {
    pub fn new(project: Project, executor: E) -> Result<Self> {
        Ok(Self {
            root: project.project_path(),
            renderer: TemplateRenderer::new()?,
            project,
            executor,
            files: Vec::new(),
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub async fn run(mut self) -> Result<Report> {
        let framework = framework_templates(self.project.project_type());
        let driver = driver_templates(self.project.db_driver());
        info!(
            project = self.project.project_name(),
            path = %self.root.display(),
            "materializing project"
        );

        create_dir(self.project.absolute_path()).await?;

        // Identity is checked before anything lands on disk
        if self.project.git_option() != GitOption::Skip {
            git::require_identity(&self.executor, "user.email").await?;
        }

        if dir_is_non_empty(&self.root)? {
            return Err(Error::DirectoryNotEmpty {
                dir: self.project.root_dir().to_string(),
            });
        }
        create_dir(&self.root).await?;

        self.project.os_check = OsCheck::detect();
        debug!(os_check = ?self.project.os_check, "host detected");

        gocmd::init_mod(&self.executor, self.project.project_name(), &self.root).await?;

        if self.project.project_type() != Framework::StandardLibrary {
            gocmd::get_packages(&self.executor, &self.root, framework.packages).await?;
        }

        if let Some(driver) = driver {
            gocmd::get_packages(&self.executor, &self.root, driver.packages).await?;
            create_dir(&self.root.join(DB_DIR)).await?;
            self.emit("internal/db/database.go", &driver.service).await?;
            if let Some(tests) = &driver.tests {
                self.emit("internal/db/database_test.go", tests).await?;
            }
        }

        let driver_compose = driver.and_then(|d| d.docker_compose);
        if let Some(compose) = &driver_compose {
            self.emit("docker-compose.yml", compose).await?;
        }

        gocmd::get_packages(&self.executor, &self.root, &[global::ENV_LOADER_PACKAGE]).await?;

        create_dir(&self.root.join(CMD_DIR)).await?;
        self.emit("cmd/api/main.go", &framework.main).await?;

        self.emit("Makefile", &global::MAKEFILE).await?;
        self.emit("README.md", &global::README).await?;

        create_dir(&self.root.join(SERVER_DIR)).await?;

        if self.project.has_feature(AdvancedFeature::React) {
            self.scaffold_frontend().await?;
        }

        if self.project.has_feature(AdvancedFeature::GoProjectWorkflow) {
            create_dir(&self.root.join(WORKFLOW_DIR)).await?;
            self.emit(".github/workflows/release.yml", &advanced::RELEASE_WORKFLOW)
                .await?;
            self.emit(".github/workflows/go-test.yml", &advanced::TEST_WORKFLOW)
                .await?;
            self.emit(".goreleaser.yml", &advanced::RELEASER_CONFIG).await?;
        }

        if self.project.has_feature(AdvancedFeature::Websocket) {
            gocmd::get_packages(&self.executor, &self.root, &[framework.websocket_package])
                .await?;
            let imports = self.render(&framework.websocket_imports)?;
            self.project
                .advanced_templates
                .template_imports
                .push_str(&imports);
        }

        if self.project.has_feature(AdvancedFeature::Docker) {
            self.emit("Dockerfile", &advanced::DOCKERFILE).await?;
            // A driver with a server already brought its own compose file
            if driver_compose.is_none() {
                self.emit("docker-compose.yml", &advanced::DOCKER_COMPOSE)
                    .await?;
            }
        }

        self.emit("internal/server/routes_test.go", &framework.routes_test)
            .await?;
        self.emit("internal/server/server.go", &framework.server).await?;
        self.emit("internal/server/routes.go", &framework.routes).await?;

        self.write_env().await?;

        self.emit(".gitignore", &global::GITIGNORE).await?;
        self.emit(".air.toml", &global::AIR_TOML).await?;

        gocmd::tidy(&self.executor, &self.root).await?;
        gocmd::fmt(&self.executor, &self.root).await?;

        match self.project.git_option() {
            GitOption::Skip => {}
            option => {
                git::require_identity(&self.executor, "user.name").await?;
                git::init_and_stage(&self.executor, &self.root).await?;
                if option == GitOption::Commit {
                    git::initial_commit(&self.executor, &self.root).await?;
                }
            }
        }

        info!(files = self.files.len(), "project materialized");
        Ok(Report {
            project_path: self.root,
            files: self.files,
        })
    }

    /// Vite + React scaffold under `frontend/`, pointed at the backend port
    async fn scaffold_frontend(&mut self) -> Result<()> {
        if !is_available(&self.executor, "npm", "--version").await {
            return Err(Error::ToolMissing {
                tool: "npm".to_string(),
            });
        }

        info!("scaffolding react frontend");
        run_checked(
            &self.executor,
            Invocation::new("npm")
                .args([
                    "create",
                    "vite@latest",
                    FRONTEND_DIR,
                    "--",
                    "--template",
                    "react-ts",
                    "--prefer-offline",
                    "--no-fund",
                ])
                .current_dir(&self.root),
        )
        .await?;

        create_dir(&self.root.join(FRONTEND_DIR).join("src")).await?;
        for (relative, contents) in advanced::REACT_FILES {
            self.write(&format!("{FRONTEND_DIR}/{relative}"), contents)
                .await?;
        }

        // .env is the source of truth for the port, so write it and read it back
        self.write_env().await?;
        let env_path = self.root.join(".env");
        let port = match fs::read_to_string(&env_path).await {
            Ok(contents) => env_port(&contents).unwrap_or(DEFAULT_PORT).to_string(),
            Err(e) => {
                debug!(error = %e, "could not read .env back, using default port");
                DEFAULT_PORT.to_string()
            }
        };

        self.write(&format!("{FRONTEND_DIR}/.env"), &format!("VITE_PORT={port}\n"))
            .await
    }

    /// Global defaults, then the driver's settings when there is a driver
    async fn write_env(&mut self) -> Result<()> {
        let mut env = self.render(&global::ENV)?;
        if let Some(driver) = driver_templates(self.project.db_driver()) {
            env.push('\n');
            env.push_str(&self.render(&driver.env)?);
        }
        self.write(".env", &env).await
    }

    fn render(&self, blob: &Blob) -> Result<String> {
        self.renderer.render(blob, &self.project)
    }

    async fn emit(&mut self, relative: &str, blob: &Blob) -> Result<()> {
        let contents = self.render(blob)?;
        self.write(relative, &contents).await
    }

    async fn write(&mut self, relative: &str, contents: &str) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            create_dir(parent).await?;
        }
        fs::write(&path, contents)
            .await
            .map_err(|e| Error::io(&path, e))?;
        debug!(file = relative, bytes = contents.len(), "wrote");

        let relative = PathBuf::from(relative);
        if !self.files.contains(&relative) {
            self.files.push(relative);
        }
        Ok(())
    }
}

async fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| Error::io(path, e))
}

/// Value of the first `PORT=` line
fn env_port(contents: &str) -> Option<&str> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix("PORT="))
        .map(str::trim)
        .filter(|port| !port.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::CreateArgs;
    use crate::flags::DbDriver;
    use crate::project::Configuration;
    use crate::resolver::tests::{Answer, ScriptedPrompter};
    use crate::resolver::{Resolution, Resolver};
    use crate::runtime::exec::tests::RecordingExecutor;
    use walkdir::WalkDir;

    fn project(
        base: &Path,
        framework: Framework,
        driver: DbDriver,
        features: &[AdvancedFeature],
        git: GitOption,
    ) -> Project {
        let args = CreateArgs {
            name: Some("github.com/acme/shop".to_string()),
            framework: Some(framework),
            driver: Some(driver),
            advanced: !features.is_empty(),
            features: features.to_vec(),
            git: Some(git),
        };
        Configuration::from_args(&args)
            .finish(base.to_path_buf())
            .unwrap()
    }

    async fn materialize(project: Project, exec: &RecordingExecutor) -> Result<Report> {
        Materializer::new(project, exec.clone()).unwrap().run().await
    }

    fn count_named(root: &Path, name: &str) -> usize {
        WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name() == name)
            .count()
    }

    #[test]
    fn test_env_port() {
        assert_eq!(env_port("PORT=9000\nAPP_ENV=local\n"), Some("9000"));
        assert_eq!(env_port("APP_ENV=local\nPORT=3000\r\n"), Some("3000"));
        assert_eq!(env_port("DB_PORT=5432\n"), None);
        assert_eq!(env_port("PORT=\n"), None);
    }

    #[tokio::test]
    async fn test_exactly_one_compose_file_when_docker_output_expected() {
        for driver in DbDriver::ALL {
            for docker in [false, true] {
                let base = tempfile::tempdir().unwrap();
                let features: &[AdvancedFeature] = if docker {
                    &[AdvancedFeature::Docker]
                } else {
                    &[]
                };
                let project = project(base.path(), Framework::Gin, driver, features, GitOption::Skip);
                let report = materialize(project, &RecordingExecutor::default())
                    .await
                    .unwrap();

                let expected = usize::from(driver.has_compose_service() || docker);
                assert_eq!(
                    count_named(&report.project_path, "docker-compose.yml"),
                    expected,
                    "{driver} docker={docker}"
                );
                assert_eq!(
                    report.project_path.join("Dockerfile").exists(),
                    docker,
                    "{driver} docker={docker}"
                );
            }
        }
    }

    #[tokio::test]
    async fn test_command_sequence_for_full_project() {
        let base = tempfile::tempdir().unwrap();
        let exec = RecordingExecutor::with_identity();
        let project = project(
            base.path(),
            Framework::Gin,
            DbDriver::Postgres,
            &[AdvancedFeature::Websocket],
            GitOption::Commit,
        );

        materialize(project, &exec).await.unwrap();

        assert_eq!(
            exec.commands(),
            vec![
                "git config --get user.email",
                "go mod init github.com/acme/shop",
                "go get -u github.com/gin-gonic/gin",
                "go get -u github.com/jackc/pgx/v5/stdlib",
                "go get -u github.com/joho/godotenv",
                "go get -u github.com/coder/websocket",
                "go mod tidy",
                "gofmt -s -w .",
                "git config --get user.name",
                "git init",
                "git add .",
                "git commit -m Initial commit",
            ]
        );
    }

    #[tokio::test]
    async fn test_generated_tree_layout() {
        let base = tempfile::tempdir().unwrap();
        let project = project(
            base.path(),
            Framework::Chi,
            DbDriver::Mysql,
            &[AdvancedFeature::GoProjectWorkflow],
            GitOption::Skip,
        );

        let report = materialize(project, &RecordingExecutor::default())
            .await
            .unwrap();
        let root = &report.project_path;

        assert_eq!(root, &base.path().join("shop"));
        for file in [
            "cmd/api/main.go",
            "internal/db/database.go",
            "internal/db/database_test.go",
            "internal/server/server.go",
            "internal/server/routes.go",
            "internal/server/routes_test.go",
            "Makefile",
            "README.md",
            ".env",
            ".gitignore",
            ".air.toml",
            "docker-compose.yml",
            ".github/workflows/release.yml",
            ".github/workflows/go-test.yml",
            ".goreleaser.yml",
        ] {
            assert!(root.join(file).is_file(), "missing {file}");
            assert!(report.files.contains(&PathBuf::from(file)), "unreported {file}");
        }

        let env = std::fs::read_to_string(root.join(".env")).unwrap();
        assert!(env.starts_with("PORT=8080\n"));
        assert!(env.contains("DB_PORT=3306"));

        for workflow in [
            ".github/workflows/release.yml",
            ".github/workflows/go-test.yml",
            ".goreleaser.yml",
        ] {
            let text = std::fs::read_to_string(root.join(workflow)).unwrap();
            serde_yaml::from_str::<serde_yaml::Value>(&text)
                .unwrap_or_else(|e| panic!("{workflow} is not valid yaml: {e}\n{text}"));
        }
    }

    #[tokio::test]
    async fn test_sqlite_has_no_integration_test() {
        let base = tempfile::tempdir().unwrap();
        let project = project(
            base.path(),
            Framework::StandardLibrary,
            DbDriver::Sqlite,
            &[],
            GitOption::Skip,
        );
        let exec = RecordingExecutor::default();

        let report = materialize(project, &exec).await.unwrap();

        assert!(report.project_path.join("internal/db/database.go").exists());
        assert!(!report.project_path.join("internal/db/database_test.go").exists());
        // standard library needs no framework package
        assert!(!exec.commands().iter().any(|c| c.contains("gin") || c.contains("chi")));
    }

    #[tokio::test]
    async fn test_refuses_non_empty_root() {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir(base.path().join("shop")).unwrap();
        std::fs::write(base.path().join("shop/keep.txt"), "mine").unwrap();
        let exec = RecordingExecutor::default();
        let project = project(base.path(), Framework::Echo, DbDriver::None, &[], GitOption::Skip);

        let err = materialize(project, &exec).await.unwrap_err();

        assert!(matches!(err, Error::DirectoryNotEmpty { .. }));
        assert!(exec.commands().is_empty());
        assert_eq!(std::fs::read_dir(base.path().join("shop")).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_existing_empty_root_is_used() {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir(base.path().join("shop")).unwrap();
        let project = project(base.path(), Framework::Echo, DbDriver::None, &[], GitOption::Skip);

        let report = materialize(project, &RecordingExecutor::default())
            .await
            .unwrap();

        assert!(report.project_path.join("cmd/api/main.go").exists());
    }

    #[tokio::test]
    async fn test_missing_email_aborts_before_any_file() {
        let base = tempfile::tempdir().unwrap();
        let exec = RecordingExecutor::default();
        let project = project(base.path(), Framework::Gin, DbDriver::None, &[], GitOption::Stage);

        let err = materialize(project, &exec).await.unwrap_err();

        match err {
            Error::GitIdentityMissing { key } => assert_eq!(key, "user.email"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(exec.commands(), vec!["git config --get user.email"]);
        assert!(!base.path().join("shop").exists());
    }

    #[tokio::test]
    async fn test_missing_name_stops_before_git_init() {
        let base = tempfile::tempdir().unwrap();
        let exec = RecordingExecutor {
            git_identity: ["user.email"].into_iter().collect(),
            ..RecordingExecutor::default()
        };
        let project = project(base.path(), Framework::Gin, DbDriver::None, &[], GitOption::Commit);

        let err = materialize(project, &exec).await.unwrap_err();

        assert!(matches!(err, Error::GitIdentityMissing { ref key } if key == "user.name"));
        assert!(!exec.commands().iter().any(|c| c == "git init"));
    }

    #[tokio::test]
    async fn test_stage_does_not_commit() {
        let base = tempfile::tempdir().unwrap();
        let exec = RecordingExecutor::with_identity();
        let project = project(base.path(), Framework::Fiber, DbDriver::None, &[], GitOption::Stage);

        materialize(project, &exec).await.unwrap();

        let commands = exec.commands();
        assert_eq!(&commands[commands.len() - 2..], ["git init", "git add ."]);
    }

    #[tokio::test]
    async fn test_failing_command_aborts_remaining_steps() {
        let base = tempfile::tempdir().unwrap();
        let exec = RecordingExecutor {
            fail_on: Some("go get"),
            ..RecordingExecutor::default()
        };
        let project = project(base.path(), Framework::Gin, DbDriver::None, &[], GitOption::Skip);

        let err = materialize(project, &exec).await.unwrap_err();

        assert!(matches!(err, Error::CommandFailed { .. }));
        assert_eq!(
            exec.commands(),
            vec!["go mod init github.com/acme/shop", "go get -u github.com/gin-gonic/gin"]
        );
        assert!(!base.path().join("shop/cmd").exists());
    }

    #[tokio::test]
    async fn test_react_frontend_reads_port_back_from_env() {
        let base = tempfile::tempdir().unwrap();
        let exec = RecordingExecutor::default();
        let project = project(
            base.path(),
            Framework::Gin,
            DbDriver::Redis,
            &[AdvancedFeature::React],
            GitOption::Skip,
        );

        let report = materialize(project, &exec).await.unwrap();
        let root = &report.project_path;

        assert_eq!(
            std::fs::read_to_string(root.join("frontend/.env")).unwrap(),
            "VITE_PORT=8080\n"
        );
        assert!(root.join("frontend/src/main.tsx").exists());
        assert!(root.join("frontend/vite.config.ts").exists());
        assert!(exec
            .commands()
            .contains(&"npm create vite@latest frontend -- --template react-ts --prefer-offline --no-fund".to_string()));
        // .env is written twice but reported once
        let env_entries = report
            .files
            .iter()
            .filter(|f| f.as_path() == Path::new(".env"))
            .count();
        assert_eq!(env_entries, 1);
    }

    #[tokio::test]
    async fn test_react_without_npm_fails() {
        let base = tempfile::tempdir().unwrap();
        let exec = RecordingExecutor {
            missing: ["npm"].into_iter().collect(),
            ..RecordingExecutor::default()
        };
        let project = project(
            base.path(),
            Framework::Gin,
            DbDriver::None,
            &[AdvancedFeature::React],
            GitOption::Skip,
        );

        let err = materialize(project, &exec).await.unwrap_err();

        assert!(matches!(err, Error::ToolMissing { ref tool } if tool == "npm"));
        assert!(!base.path().join("shop/frontend").exists());
    }

    #[tokio::test]
    async fn test_websocket_handler_lands_in_routes() {
        let base = tempfile::tempdir().unwrap();
        let project = project(
            base.path(),
            Framework::Fiber,
            DbDriver::None,
            &[AdvancedFeature::Websocket],
            GitOption::Skip,
        );
        let exec = RecordingExecutor::default();

        let report = materialize(project, &exec).await.unwrap();

        let routes =
            std::fs::read_to_string(report.project_path.join("internal/server/routes.go")).unwrap();
        assert!(routes.contains("\"github.com/gofiber/contrib/websocket\""));
        assert!(routes.contains("websocket.New(s.websocketHandler)"));
        assert!(exec
            .commands()
            .contains(&"go get -u github.com/gofiber/contrib/websocket".to_string()));
    }

    #[tokio::test]
    async fn test_cancel_at_driver_runs_no_effects() {
        let base = tempfile::tempdir().unwrap();
        let exec = RecordingExecutor::with_identity();
        let mut prompter =
            ScriptedPrompter::new(vec![Answer::Text("shop"), Answer::Pick(1), Answer::Cancel]);
        let mut config = Configuration::from_args(&CreateArgs::default());

        let resolution = Resolver::new(&mut prompter, base.path().to_path_buf())
            .resolve(&mut config)
            .unwrap();
        assert_eq!(resolution, Resolution::Cancelled);

        let err = config.finish(base.path().to_path_buf()).unwrap_err();

        assert!(matches!(err, Error::Cancelled));
        assert!(exec.commands().is_empty());
        assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
    }
}
