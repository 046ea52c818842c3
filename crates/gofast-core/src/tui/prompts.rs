//! Interactive `create` flow using cliclack

use super::{ProgressGuard, TermPrompter};
use crate::args::CreateArgs;
use crate::echo::{non_interactive_command, FlagSet};
use crate::flags::{AdvancedFeature, GitOption};
use crate::materializer::{Materializer, Report};
use crate::product::ProductConfig;
use crate::project::{Configuration, Project};
use crate::resolver::{Resolution, Resolver};
use crate::runtime::{self, SystemExecutor, ToolchainNeeds};
use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

/// How an interactive run ended
#[derive(Debug)]
pub enum Outcome {
    Created(Report),
    /// The operator backed out of a prompt; nothing was written
    Cancelled,
}

/// Run the create command, prompting for whatever `args` left open
pub async fn run<C: ProductConfig>(product: &C, args: CreateArgs) -> Result<Outcome> {
    cliclack::intro(product.display_name())?;

    if args.advanced {
        cliclack::log::info("Advanced mode: you will be asked about extra features")?;
    }

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let mut config = Configuration::from_args(&args);

    // Step 1: Resolve every choice the flags left open
    let mut prompter = TermPrompter::new();
    let resolution = Resolver::new(&mut prompter, cwd.clone()).resolve(&mut config)?;
    let interactive = match resolution {
        Resolution::Resolved { interactive } => interactive,
        Resolution::Cancelled => {
            cliclack::outro_cancel("Project creation cancelled")?;
            return Ok(Outcome::Cancelled);
        }
    };

    let flags = FlagSet::from_configuration(&config);
    let project = config.finish(cwd)?;

    // Step 2: Make sure the toolchains the pipeline shells out to exist
    check_toolchains(&project)?;

    // Step 3: Generate the project
    let report = create_project(project.clone()).await?;

    // Step 4: Show next steps and the reproducible command
    print_next_steps(product, &report, &project)?;
    if interactive {
        let command = non_interactive_command(product.name(), "create", &flags);
        cliclack::log::info(format!(
            "{}\n{}",
            "Repeat with the following non-interactive command:".bold(),
            command.cyan()
        ))?;
    }

    cliclack::outro("Happy coding!")?;
    Ok(Outcome::Created(report))
}

fn check_toolchains(project: &Project) -> Result<()> {
    let needs = ToolchainNeeds {
        git: project.git_option() != GitOption::Skip,
        npm: project.has_feature(AdvancedFeature::React),
    };

    let spinner = cliclack::spinner();
    spinner.start("Checking toolchains...");

    match runtime::check_toolchains(needs) {
        Ok(found) => {
            let names: Vec<String> = found
                .iter()
                .map(|t| format!("{} ({})", t.name, t.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected toolchains: {}", names.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.error("Missing toolchains");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing toolchains and try again.");
        }
    }
}

/// Run the pipeline on its own task so a panic surfaces as an error
/// instead of tearing down the terminal mid-spinner
async fn create_project(project: Project) -> Result<Report> {
    let progress = ProgressGuard::start("Creating project...");
    let materializer = Materializer::new(project, SystemExecutor)?;

    match tokio::spawn(materializer.run()).await {
        Ok(Ok(report)) => {
            progress.finish(format!(
                "Created {} files in {}",
                report.files.len(),
                report.project_path.display()
            ));
            Ok(report)
        }
        Ok(Err(e)) => {
            progress.fail("Project creation failed");
            Err(e.into())
        }
        Err(e) if e.is_panic() => {
            progress.fail("Project creation failed");
            debug!(error = %e, "materializer panicked");
            anyhow::bail!("An unexpected issue occurred while creating the project. Please report it.")
        }
        Err(e) => {
            progress.fail("Project creation failed");
            Err(e).context("Project creation task did not complete")
        }
    }
}

fn print_next_steps<C: ProductConfig>(product: &C, report: &Report, project: &Project) -> Result<()> {
    let steps = product.next_steps(&report.project_path, project);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();

    cliclack::log::remark(format!("Docs: {}", product.docs_url()))?;
    Ok(())
}
