// src/commands/run.rs

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{
        discovery, execution,
        models::{RunSummary, StageOutcome},
        parser::UnityParser,
        stages,
    },
    infra::{fs, t},
    reporting::{console, html, json},
};

/// Options resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Remove the build directory before any other stage.
    pub clean: bool,
    /// Stop after a successful build; skip running and summarizing.
    pub build_only: bool,
    /// Skip configure and build; run whatever the build directory holds.
    pub run_only: bool,
    /// Reserved; only affects how much raw suite output is echoed.
    pub verbose: bool,
    /// The project root; `tests/` and `tests/build/` live below it.
    pub project_dir: PathBuf,
    /// Optional path for the HTML report.
    pub html: Option<PathBuf>,
    /// Optional path for the JSON summary.
    pub json: Option<PathBuf>,
    /// The locale for all user-facing output.
    pub lang: String,
}

/// Drives the pipeline: validate preconditions, then clean, configure,
/// build, run, and summarize according to the requested mode, stopping at
/// the first stage failure.
pub async fn execute(options: RunOptions) -> Result<()> {
    let locale = options.lang.as_str();

    console::print_stage_banner(&t!("run.banner", locale = locale));

    let project_root = fs::absolute_path(&options.project_dir)?;
    let tests_dir = project_root.join(stages::TESTS_DIR_NAME);
    let build_dir = tests_dir.join(stages::BUILD_DIR_NAME);

    println!(
        "{}",
        t!("run.project_root", locale = locale, path = project_root.display()).blue()
    );
    println!(
        "{}",
        t!("run.tests_dir", locale = locale, path = tests_dir.display()).blue()
    );
    println!(
        "{}",
        t!("run.build_dir", locale = locale, path = build_dir.display()).blue()
    );
    println!();

    // A missing tests directory is a configuration error, not a test failure.
    if !fs::is_directory(&tests_dir) {
        println!(
            "{}",
            t!("run.tests_dir_missing", locale = locale, path = tests_dir.display()).red()
        );
        anyhow::bail!("Tests directory not found: {}", tests_dir.display());
    }

    if options.clean {
        stages::clean(&build_dir)?;
    }

    if !options.run_only {
        if let StageOutcome::Failed { output } = stages::configure(&build_dir).await? {
            println!("{}", output);
            anyhow::bail!("CMake configuration failed.");
        }

        if let StageOutcome::Failed { output } = stages::build(&build_dir).await? {
            println!("{}", output);
            anyhow::bail!("Build failed.");
        }
    }

    if options.build_only {
        println!("{}", t!("run.build_only_done", locale = locale).green());
        return Ok(());
    }

    console::print_stage_banner(&t!("stage.run_banner", locale = locale));

    let binaries = discovery::discover(&build_dir)?;
    if binaries.is_empty() {
        println!("{}", t!("run.no_binaries", locale = locale).yellow());
        anyhow::bail!("No test executables found.");
    }

    let parser = UnityParser;
    let reports = execution::run_all_suites(&binaries, &build_dir, &parser, options.verbose).await;
    let summary = RunSummary::from_reports(&reports);

    console::print_summary(&reports, &summary, locale);

    if let Some(path) = &options.json {
        json::write_json_summary(&reports, &summary, path)?;
        println!(
            "{}",
            t!("report.json_written", locale = locale, path = path.display()).blue()
        );
    }

    if let Some(path) = &options.html {
        if let Err(e) = html::generate_html_report(&reports, &summary, path, locale) {
            eprintln!("{} {}", t!("report.html_failed", locale = locale).red(), e);
        } else {
            println!(
                "{}",
                t!("report.html_written", locale = locale, path = path.display()).blue()
            );
        }
    }

    if summary.total_failures > 0 {
        console::print_failure_details(&reports, locale);
        println!(
            "\n{}",
            t!("report.failures", locale = locale, count = summary.total_failures)
                .red()
                .bold()
        );
        anyhow::bail!("{} test failure(s) reported.", summary.total_failures);
    }

    // A suite that died before printing its report line contributes nothing
    // to the failure count but must not turn the run green.
    if !summary.all_suites_passed() {
        console::print_failure_details(&reports, locale);
        let crashed = summary.total_suites - summary.passed_suites;
        println!(
            "\n{}",
            t!("report.crashed_suites", locale = locale, count = crashed)
                .red()
                .bold()
        );
        anyhow::bail!("{} suite(s) failed without a parsable report.", crashed);
    }

    println!("\n{}", t!("report.all_passed", locale = locale).green().bold());
    Ok(())
}
