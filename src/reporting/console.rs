//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the generation and display of run results in the
//! console: stage banners, the per-suite table, suite and test totals, and
//! the captured output of failed suites.
//!
//! 此模块处理控制台中运行结果的生成和显示：
//! 阶段横幅、每个套件的表格、套件与测试总数，以及失败套件的捕获输出。

use colored::*;

use crate::core::models::{RunSummary, SuiteReport};
use crate::infra::t;

/// Prints a bold banner line announcing a pipeline stage.
/// 打印一行加粗的横幅，宣布一个流水线阶段。
///
/// # Output Format / 输出格式
/// ```text
/// ============================================================
/// Running Tests
/// ============================================================
/// ```
pub fn print_stage_banner(title: &str) {
    println!("\n{}", "=".repeat(60).cyan().bold());
    println!("{}", title.cyan().bold());
    println!("{}\n", "=".repeat(60).cyan().bold());
}

/// Prints a formatted summary of the run to the console: one table row per
/// suite followed by the aggregated suite and test totals, color coded.
///
/// 在控制台打印本次运行的格式化摘要：每个套件一行表格，
/// 随后是汇总的套件和测试总数，并以颜色编码。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - Passed   | test_math                                |     8 tests    0 failures
///   - Failed   | test_io                                  |     4 tests    1 failures
/// Test Suites: 1 passed, 1 failed, 2 total
/// Tests:       11 passed, 1 failed, 12 total
/// ```
pub fn print_summary(reports: &[SuiteReport], summary: &RunSummary, locale: &str) {
    print_stage_banner(&t!("report.banner", locale = locale));

    for report in reports {
        let status_str = report.status_str(locale);
        let status_colored = if report.passed {
            status_str.green()
        } else {
            status_str.red()
        };

        println!(
            "  - {:<10} | {:<40} | {:>5} tests {:>4} failures",
            status_colored, report.name, report.tests, report.failures
        );
    }
    println!();

    let failed_suites = summary.total_suites - summary.passed_suites;
    println!(
        "{} {}, {}, {}",
        t!("report.suites_label", locale = locale).bold(),
        t!("report.passed", locale = locale, count = summary.passed_suites).green(),
        t!("report.failed", locale = locale, count = failed_suites).red(),
        t!("report.total", locale = locale, count = summary.total_suites)
    );

    let passed_tests = summary.total_tests - summary.total_failures;
    println!(
        "{} {}, {}, {}",
        t!("report.tests_label", locale = locale).bold(),
        t!("report.passed", locale = locale, count = passed_tests).green(),
        t!("report.failed", locale = locale, count = summary.total_failures).red(),
        t!("report.total", locale = locale, count = summary.total_tests)
    );
}

/// Prints the captured output of every failed suite, helping developers
/// debug without re-running the binaries. Returns early when nothing failed.
///
/// 打印每个失败套件的捕获输出，帮助开发者无需重新运行可执行文件即可调试。
/// 没有失败时提前返回。
pub fn print_failure_details(reports: &[SuiteReport], locale: &str) {
    let failures: Vec<&SuiteReport> = reports.iter().filter(|r| r.is_failure()).collect();
    if failures.is_empty() {
        return;
    }

    println!(
        "\n{}",
        t!("report.failure_banner", locale = locale).red().bold()
    );
    println!("{}", "-".repeat(80));

    for (i, report) in failures.iter().enumerate() {
        println!("[{}/{}] {}", i + 1, failures.len(), report.name.cyan());
        println!(
            "\n--- {} ---\n",
            t!("report.suite_log", locale = locale).yellow()
        );
        println!("{}", report.output);
        println!("{}", "-".repeat(80));
    }
}
