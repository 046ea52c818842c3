//! gofast CLI - scaffolding for Go backend services

use anyhow::Result;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use gofast_core::tui::Outcome;
use gofast_core::version::BuildInfo;
use gofast_core::{CreateArgs, Gofast, ProductConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code shared by Ctrl+C and a cancelled prompt
const EXIT_CANCELLED: i32 = 130;

#[derive(Parser, Debug)]
#[command(name = "gofast")]
pub struct Args {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Go project
    Create(CreateArgs),
    /// Print the version of this build
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(EXIT_CANCELLED);
    })
    .ok();

    let args = Args::from_arg_matches(&cli().get_matches()).unwrap_or_else(|e| e.exit());
    init_tracing(args.verbose);

    match args.command {
        Some(Command::Version) => {
            println!("Go Fast CLI version: {}", build_info().describe());
            Ok(())
        }
        Some(Command::Create(create_args)) => create(create_args).await,
        // No subcommand: interactive create with nothing preset
        None => create(CreateArgs::default()).await,
    }
}

async fn create(args: CreateArgs) -> Result<()> {
    let result = gofast_core::tui::run(&Gofast, args).await;

    // Ensure cursor is visible on every exit path
    if let Err(e) = console::Term::stderr().show_cursor() {
        tracing::debug!(error = %e, "could not restore cursor");
    }

    match result? {
        Outcome::Created(report) => {
            tracing::debug!(files = report.files.len(), "project created");
            Ok(())
        }
        Outcome::Cancelled => std::process::exit(EXIT_CANCELLED),
    }
}

/// Argument parser carrying the product's description
fn cli() -> clap::Command {
    Args::command().about(Gofast.cli_description())
}

fn build_info() -> BuildInfo<'static> {
    BuildInfo {
        embedded: option_env!("GOFAST_VERSION"),
        package: Some(env!("CARGO_PKG_VERSION")),
        revision: option_env!("GOFAST_GIT_SHA"),
        revision_date: option_env!("GOFAST_GIT_DATE"),
    }
}

/// `GOFAST_LOG` wins; otherwise warn, raised one level per `-v`
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("GOFAST_LOG").unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
