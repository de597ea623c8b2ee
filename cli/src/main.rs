mod bump_version;
mod cleanup;
mod cli;
mod config_cmd;
mod context;
mod error;
mod preview;
mod progress;
mod start_work;
#[cfg(test)]
mod testing;
mod ui;
mod update_changelog;
mod validate;
mod version_cmd;
mod workflow;

use bump_version::BumpRequest;
use clap::Parser;
use cli::{Cli, Commands, ReleaseAction};
use colored::Colorize;
use context::Context;
use error::{CliError, Result};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use version::BumpOverrides;

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(root) => Ok(root),
        None => Ok(env::current_dir()?),
    }
}

fn run_release(root: PathBuf, action: ReleaseAction) -> Result<()> {
    let ctx = Context::load(root)?;
    match action {
        ReleaseAction::Validate => validate::execute(&ctx),
        ReleaseAction::BumpVersion {
            message,
            language,
            major,
            minor,
            patch,
            explicit_version,
            no_commit,
            tracker,
        } => bump_version::execute(
            &ctx,
            language,
            tracker.as_deref(),
            BumpRequest {
                message,
                overrides: BumpOverrides {
                    major,
                    minor,
                    patch,
                },
                explicit_version,
                no_commit,
            },
        ),
        ReleaseAction::UpdateChangelog => update_changelog::execute(&ctx),
        ReleaseAction::Preview {
            user,
            changes,
            language,
            tracker,
        } => preview::execute(&ctx, user.as_deref(), changes, language, tracker.as_deref()),
        ReleaseAction::Cleanup {
            user,
            force,
            language,
            tracker,
        } => cleanup::execute(&ctx, user.as_deref(), force, language, tracker.as_deref()),
        ReleaseAction::StartWork { branch_type, name } => {
            start_work::execute(&ctx, branch_type, name.as_deref())
        }
    }
}

fn report(err: &CliError) {
    if let Some(violation) = err.as_violation() {
        ui::violation_block(violation);
        return;
    }
    eprintln!("{} {}", "Error:".bold().red(), err.user_message());
    for hint in err.hints() {
        eprintln!("  {hint}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = resolve_root(cli.root).and_then(|root| match cli.command {
        Commands::ReleaseHelper { action } => run_release(root, action),
        Commands::Config { action } => config_cmd::execute(&root, action),
        Commands::Version => version_cmd::execute(),
    });

    if let Err(err) = result {
        report(&err);
        process::exit(1);
    }
}
