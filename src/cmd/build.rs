// fmm-mod-creator: FMM x MOD Creator build core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build and validate command implementations.

use std::sync::OnceLock;

use anyhow::Context;
use flume::Receiver;
use indicatif::{ProgressBar, ProgressStyle};

use crate::build::pipeline::BuildEvent;
use crate::build::service::BuildService;
use crate::build::validate::validate;
use crate::cli::build::{BuildArgs, ValidateArgs};
use crate::config::Config;
use crate::config::types::BuildSettings;
use crate::error::Result;
use crate::project::ModProject;

/// Main handler for build command.
///
/// # Errors
///
/// Returns an error if the project file cannot be read, fails validation, or
/// the pipeline reports a failure.
pub async fn run_build_command(args: &BuildArgs, config: &Config) -> Result<()> {
    let project = ModProject::load(&args.project)?;
    let settings = settings_for(args, config);
    tracing::info!(
        project = %args.project.display(),
        format = %settings.archive_format,
        output = %settings.output_dir().display(),
        "Starting build"
    );

    let service = BuildService::new(settings);
    let handle = service.start(project)?;

    let bar = (!args.no_progress).then(progress_bar);
    let reporter = tokio::spawn(report_events(handle.events().clone(), bar));

    let outcome = handle.wait().await;
    reporter.await.context("progress reporter stopped")?;

    let outcome = outcome.context("build failed")?;
    println!("{}", outcome.output_path.display());
    Ok(())
}

/// Main handler for validate command.
///
/// # Errors
///
/// Returns an error if the project file cannot be read or is rejected.
pub fn run_validate_command(args: &ValidateArgs) -> Result<()> {
    let project = ModProject::load(&args.project)?;
    validate(&project).with_context(|| format!("{} is not buildable", args.project.display()))?;
    println!("{}: ok", args.project.display());
    Ok(())
}

/// Effective settings: loaded config with command-line overrides applied.
#[must_use]
pub fn settings_for(args: &BuildArgs, config: &Config) -> BuildSettings {
    let mut settings = config.build.clone();
    if let Some(format) = args.format {
        settings.archive_format = format;
    }
    if let Some(output) = &args.output {
        settings.output_directory = Some(output.clone());
    }
    if let Some(cache) = &args.cache {
        settings.cache_directory = Some(cache.clone());
    }
    settings
}

async fn report_events(events: Receiver<BuildEvent>, bar: Option<ProgressBar>) {
    while let Ok(event) = events.recv_async().await {
        match (&bar, event) {
            (Some(bar), BuildEvent::Progress(percent)) => bar.set_position(u64::from(percent)),
            (Some(bar), BuildEvent::Status(stage)) => bar.set_message(stage.to_string()),
            (Some(bar), BuildEvent::Completed(_)) => bar.finish_with_message("build_completed"),
            (Some(bar), BuildEvent::Failed(message)) => bar.abandon_with_message(message),
            (None, BuildEvent::Status(stage)) => tracing::info!(%stage, "Build stage"),
            (None, _) => {}
        }
    }
}

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    bar.set_style(bar_style());
    bar
}

fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos:>3}% {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}
