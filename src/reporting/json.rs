//! # JSON Reporting Module / JSON 报告模块
//!
//! This module writes a machine-readable summary of the run, the CI-side
//! counterpart of the HTML report.
//!
//! 此模块写出本次运行的机器可读摘要，是 HTML 报告在 CI 侧的对应物。

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::models::{RunSummary, SuiteReport};

/// The serialized shape of a run: timestamp, aggregated summary, and the
/// per-suite rows in execution order.
/// 一次运行的序列化形态：时间戳、汇总摘要，以及按执行顺序排列的套件行。
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    summary: &'a RunSummary,
    suites: &'a [SuiteReport],
}

/// Writes the pretty-printed JSON summary of the run to `output_path`.
/// 将本次运行的格式化 JSON 摘要写入 `output_path`。
pub fn write_json_summary(
    reports: &[SuiteReport],
    summary: &RunSummary,
    output_path: &Path,
) -> Result<()> {
    let document = JsonReport {
        generated_at: chrono::Local::now().to_rfc3339(),
        summary,
        suites: reports,
    };

    let json = serde_json::to_string_pretty(&document)?;
    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON summary: {}", output_path.display()))?;
    Ok(())
}
