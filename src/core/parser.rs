//! # Report Parser Module / 报告解析模块
//!
//! This module turns the raw console output of one test binary into a
//! structured [`SuiteReport`]. The parser is a versioned adapter over one
//! specific test framework's console format (Unity); it sits behind the
//! [`ReportParser`] trait so an alternate framework can be supported by
//! swapping the adapter without touching the rest of the pipeline.
//!
//! 此模块将单个测试可执行文件的原始控制台输出转换为结构化的
//! [`SuiteReport`]。解析器是针对特定测试框架（Unity）控制台格式的
//! 版本化适配器；它位于 [`ReportParser`] trait 之后，
//! 因此更换适配器即可支持其他框架，而无需改动流水线的其余部分。

use crate::core::models::{CommandOutput, SuiteReport};

/// Adapter from one test binary's captured output to a structured report.
/// 从单个测试可执行文件的捕获输出到结构化报告的适配器。
pub trait ReportParser {
    /// Parses the captured output of the named suite into a report.
    /// Must always produce a report; output that cannot be interpreted
    /// falls back to the process exit status.
    ///
    /// 将指定套件的捕获输出解析为报告。
    /// 必须总是产生一个报告；无法解释的输出回退到进程退出状态。
    fn parse(&self, suite_name: &str, result: &CommandOutput) -> SuiteReport;
}

/// Parser for the Unity test framework's console report.
///
/// Unity prints one aggregate line after the individual results, shaped as
/// `<N> Tests <F> Failures <I> Ignored`. When several candidate lines are
/// present, the last one wins: the final aggregate line overwrites any
/// per-test lines that happened to match.
///
/// Unity 测试框架控制台报告的解析器。
///
/// Unity 在各个测试结果之后打印一行汇总，形如
/// `<N> Tests <F> Failures <I> Ignored`。存在多个候选行时以最后一行为准：
/// 最终的汇总行会覆盖恰好匹配的逐测试行。
#[derive(Debug, Default, Clone, Copy)]
pub struct UnityParser;

impl ReportParser for UnityParser {
    fn parse(&self, suite_name: &str, result: &CommandOutput) -> SuiteReport {
        // The last matching line is authoritative. A matching line whose
        // numbers do not parse resets to None and the report fails closed.
        // 以最后一个匹配行为准。数字无法解析的匹配行会重置为 None，
        // 报告按保守方式关闭。
        let mut counts: Option<(u32, u32)> = None;

        for line in result.stdout.lines() {
            if !(line.contains("Tests") && line.contains("Failures")) {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 4 {
                continue;
            }
            counts = parse_counts(&tokens);
        }

        match counts {
            Some((tests, failures)) => SuiteReport {
                name: suite_name.to_string(),
                tests,
                failures,
                // A parsed report line is authoritative over the exit status.
                // 解析到的报告行优先于退出状态。
                passed: failures == 0,
                parsed: true,
                output: result.stdout.clone(),
            },
            None => SuiteReport {
                name: suite_name.to_string(),
                tests: 0,
                failures: 0,
                passed: result.success,
                parsed: false,
                output: result.stdout.clone(),
            },
        }
    }
}

/// Interprets token[0] as the test count and token[2] as the failure count.
/// Returns `None` for non-numeric tokens or a failure count exceeding the
/// test count, so malformed lines fail closed.
///
/// 将 token[0] 解释为测试数，token[2] 解释为失败数。
/// 对于非数字的 token 或失败数超过测试数的情况返回 `None`，
/// 使格式错误的行按保守方式关闭。
fn parse_counts(tokens: &[&str]) -> Option<(u32, u32)> {
    let tests: u32 = tokens[0].parse().ok()?;
    let failures: u32 = tokens[2].parse().ok()?;
    (failures <= tests).then_some((tests, failures))
}
