//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the runner:
//! captured external command output, discovered test binaries, per-suite
//! reports, stage outcomes, and the aggregated run summary.
//!
//! 此模块定义了整个运行器中使用的核心数据结构：
//! 捕获的外部命令输出、发现的测试可执行文件、每个套件的报告、
//! 阶段结果以及汇总的运行摘要。

use crate::infra::t;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The captured result of one external process invocation.
/// Produced once per call and consumed immediately by the invoking stage;
/// it is never stored beyond that stage.
///
/// 一次外部进程调用的捕获结果。
/// 每次调用产生一次，并由调用它的阶段立即消费；
/// 不会在该阶段之外保存。
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// `true` if the process exited with status 0.
    /// 如果进程以状态 0 退出，则为 `true`。
    pub success: bool,
    /// Everything the process wrote to stdout, fully buffered.
    /// 进程写入 stdout 的全部内容，完整缓冲。
    pub stdout: String,
    /// Everything the process wrote to stderr, fully buffered.
    /// 进程写入 stderr 的全部内容，完整缓冲。
    pub stderr: String,
}

/// A test executable discovered in the build directory.
/// 在构建目录中发现的测试可执行文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestBinary {
    /// Absolute path to the executable file.
    /// 可执行文件的绝对路径。
    pub path: PathBuf,
    /// The file name, used as the suite name in reports.
    /// 文件名，在报告中用作套件名称。
    pub name: String,
}

/// The outcome of a single pipeline stage (configure or build).
/// A stage that ran its external tool to completion but saw a non-zero exit
/// is `Failed`, carrying the captured stderr for display; only unspawnable
/// tools or missing directories surface as hard errors upstream.
///
/// 单个流水线阶段（配置或构建）的结果。
/// 外部工具运行结束但以非零状态退出的阶段为 `Failed`，
/// 并携带捕获的 stderr 以供显示；只有无法派生的工具或缺失的目录
/// 才会作为硬错误向上传递。
#[derive(Debug, Clone)]
pub enum StageOutcome {
    /// The stage completed successfully, with a human-readable detail line.
    /// 阶段成功完成，并附带一行人类可读的详细信息。
    Success {
        /// Cosmetic summary of what the stage did (e.g. built targets).
        /// 阶段所做工作的外观性摘要（例如构建的目标）。
        detail: String,
    },
    /// The external tool reported failure.
    /// 外部工具报告了失败。
    Failed {
        /// The captured stderr of the failed tool, surfaced verbatim.
        /// 失败工具捕获的 stderr，原样呈现。
        output: String,
    },
}

impl StageOutcome {
    /// Checks if the stage completed successfully.
    pub fn succeeded(&self) -> bool {
        matches!(self, StageOutcome::Success { .. })
    }
}

/// The parsed result of running one test binary (one Unity suite).
/// 运行一个测试可执行文件（一个 Unity 套件）的解析结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// The suite name (the binary's file name).
    /// 套件名称（可执行文件的文件名）。
    pub name: String,
    /// Total number of tests the suite reported.
    /// 套件报告的测试总数。
    pub tests: u32,
    /// Number of failed tests the suite reported.
    /// 套件报告的失败测试数。
    pub failures: u32,
    /// The per-suite verdict. When a report line was parsed it is
    /// `failures == 0`; otherwise it falls back to the process exit status.
    /// 每个套件的结论。解析到报告行时为 `failures == 0`；
    /// 否则回退到进程退出状态。
    pub passed: bool,
    /// `true` if a Unity report line was found and parsed. An unparsed
    /// report is a data-quality signal distinct from a test failure.
    /// 如果找到并解析了 Unity 报告行，则为 `true`。
    /// 未解析的报告是一种数据质量信号，不同于测试失败。
    pub parsed: bool,
    /// The complete stdout of the suite, kept for display.
    /// 套件的完整 stdout，保留用于显示。
    pub output: String,
}

impl SuiteReport {
    /// Checks if the suite is counted as failed.
    pub fn is_failure(&self) -> bool {
        !self.passed
    }

    /// Gets the status of the suite as a localized string for display.
    /// 以本地化字符串形式获取套件状态以供显示。
    pub fn status_str(&self, locale: &str) -> String {
        if self.passed {
            t!("report.status_passed", locale = locale).to_string()
        } else {
            t!("report.status_failed", locale = locale).to_string()
        }
    }

    /// Gets the appropriate CSS class for the suite status.
    pub fn status_class(&self) -> &str {
        if !self.parsed {
            "status-Unparsed"
        } else if self.passed {
            "status-Passed"
        } else {
            "status-Failed"
        }
    }
}

/// The aggregated result of a whole run, derived once from the ordered
/// sequence of suite reports and never mutated afterwards.
///
/// 整次运行的汇总结果，从有序的套件报告序列中一次性推导，
/// 之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of suites that ran.
    /// 运行的套件数量。
    pub total_suites: usize,
    /// Number of suites whose verdict was `passed`.
    /// 结论为通过的套件数量。
    pub passed_suites: usize,
    /// Sum of per-suite test counts.
    /// 各套件测试数之和。
    pub total_tests: u64,
    /// Sum of per-suite failure counts.
    /// 各套件失败数之和。
    pub total_failures: u64,
    /// `0` exactly when `total_failures` is zero, `1` otherwise.
    /// 当且仅当 `total_failures` 为零时为 `0`，否则为 `1`。
    pub exit_code: i32,
}

impl RunSummary {
    /// Derives the summary from the ordered sequence of suite reports.
    /// 从有序的套件报告序列推导摘要。
    pub fn from_reports(reports: &[SuiteReport]) -> Self {
        let total_suites = reports.len();
        let passed_suites = reports.iter().filter(|r| r.passed).count();
        let total_tests = reports.iter().map(|r| u64::from(r.tests)).sum();
        let total_failures: u64 = reports.iter().map(|r| u64::from(r.failures)).sum();

        Self {
            total_suites,
            passed_suites,
            total_tests,
            total_failures,
            exit_code: if total_failures == 0 { 0 } else { 1 },
        }
    }

    /// Checks whether every suite reached a passing verdict. A suite can fail
    /// this check without contributing to `total_failures`, e.g. a binary
    /// that crashed before printing its report line.
    ///
    /// 检查是否所有套件都达到了通过的结论。某个套件可能在不增加
    /// `total_failures` 的情况下未通过此检查，例如在打印报告行之前
    /// 就崩溃的可执行文件。
    pub fn all_suites_passed(&self) -> bool {
        self.passed_suites == self.total_suites
    }
}
