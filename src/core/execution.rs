//! # Suite Execution Module / 套件执行模块
//!
//! This module runs the discovered test binaries strictly one at a time, in
//! discovery order, and collects one report per binary unconditionally: a
//! binary that cannot be spawned or crashes still yields a failed report and
//! never aborts the remaining suites.
//!
//! 此模块按发现顺序严格逐个运行发现的测试可执行文件，
//! 并无条件地为每个可执行文件收集一份报告：
//! 无法派生或崩溃的可执行文件仍会产生一份失败报告，
//! 并且绝不会中止其余套件的执行。

use colored::*;
use std::path::Path;

use crate::core::models::{SuiteReport, TestBinary};
use crate::core::parser::ReportParser;
use crate::infra::{command, t};

/// Runs every discovered binary with the build directory as its working
/// directory and parses its output into a report. Each suite's raw output is
/// echoed when it failed, or always under `verbose`; the per-suite status
/// line is printed unconditionally.
///
/// 以构建目录为工作目录运行每个发现的可执行文件，并将其输出解析为报告。
/// 套件失败时回显其原始输出，`verbose` 模式下总是回显；
/// 每个套件的状态行无条件打印。
pub async fn run_all_suites(
    binaries: &[TestBinary],
    build_dir: &Path,
    parser: &dyn ReportParser,
    verbose: bool,
) -> Vec<SuiteReport> {
    let mut reports = Vec::with_capacity(binaries.len());

    for binary in binaries {
        println!("{}", t!("run.suite_running", name = &binary.name).blue());

        let report = match command::run_command(&binary.path, &[], build_dir, None).await {
            Ok(output) => {
                if !output.stderr.trim().is_empty() {
                    eprintln!("{}", output.stderr.trim());
                }
                parser.parse(&binary.name, &output)
            }
            Err(e) => {
                // An unspawnable binary is recorded as a failed suite; the
                // remaining binaries still run.
                // 无法派生的可执行文件记录为失败的套件；其余可执行文件照常运行。
                println!(
                    "{}",
                    t!("run.suite_crashed", name = &binary.name, error = e).red()
                );
                SuiteReport {
                    name: binary.name.clone(),
                    tests: 0,
                    failures: 0,
                    passed: false,
                    parsed: false,
                    output: e.to_string(),
                }
            }
        };

        if (verbose || report.is_failure()) && !report.output.trim().is_empty() {
            println!("{}", report.output.trim());
        }

        if report.passed {
            println!(
                "{}",
                t!("run.suite_passed", name = &report.name, tests = report.tests).green()
            );
        } else {
            println!(
                "{}",
                t!(
                    "run.suite_failed",
                    name = &report.name,
                    failures = report.failures,
                    tests = report.tests
                )
                .red()
            );
        }
        if !report.parsed {
            println!(
                "{}",
                t!("run.suite_unparsed", name = &report.name).yellow()
            );
        }
        println!();

        reports.push(report);
    }

    reports
}
