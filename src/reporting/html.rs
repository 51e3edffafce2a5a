//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of a self-contained HTML report:
//! summary statistics, a per-suite results table, and collapsible raw output
//! for failed suites.
//!
//! 此模块处理自包含 HTML 报告的生成：
//! 摘要统计、每个套件的结果表格，以及失败套件可折叠的原始输出。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::{RunSummary, SuiteReport};
use crate::infra::t;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Generates a self-contained HTML report of the run.
///
/// 生成本次运行的自包含 HTML 报告。
///
/// # Arguments / 参数
/// * `reports` - The per-suite reports, in execution order
///               每个套件的报告，按执行顺序
/// * `summary` - The aggregated run summary / 汇总的运行摘要
/// * `output_path` - The file path where the HTML report will be saved
///                   保存 HTML 报告的文件路径
/// * `locale` - The locale to use for the report's labels
///              报告标签使用的语言环境
///
/// # Errors / 错误
/// Returns an error if the output file cannot be written.
/// 无法写入输出文件时返回错误。
pub fn generate_html_report(
    reports: &[SuiteReport],
    summary: &RunSummary,
    output_path: &Path,
    locale: &str,
) -> Result<()> {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><meta charset='utf-8'><title>{}</title>",
        t!("html_report.title", locale = locale)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!(
        "<h1>{}</h1>",
        t!("html_report.main_header", locale = locale)
    ));
    html.push_str(&format!(
        "<p class='timestamp'>{}</p>",
        t!(
            "html_report.generated_at",
            locale = locale,
            time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    ));

    // Summary statistics cards
    let failed_suites = summary.total_suites - summary.passed_suites;
    html.push_str("<div class='summary-container'>");
    html.push_str(&summary_item(
        "",
        summary.total_suites as u64,
        &t!("html_report.summary.suites", locale = locale),
    ));
    html.push_str(&summary_item(
        " passed-text",
        summary.passed_suites as u64,
        &t!("html_report.summary.passed", locale = locale),
    ));
    html.push_str(&summary_item(
        " failed-text",
        failed_suites as u64,
        &t!("html_report.summary.failed", locale = locale),
    ));
    html.push_str(&summary_item(
        "",
        summary.total_tests,
        &t!("html_report.summary.tests", locale = locale),
    ));
    html.push_str(&summary_item(
        " failed-text",
        summary.total_failures,
        &t!("html_report.summary.failures", locale = locale),
    ));
    html.push_str("</div>");

    // Results table
    html.push_str("<table><thead><tr>");
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.name", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='status-col'>{}</th>",
        t!("html_report.table.header.status", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='count-cell'>{}</th>",
        t!("html_report.table.header.tests", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='count-cell'>{}</th>",
        t!("html_report.table.header.failures", locale = locale)
    ));
    html.push_str("</tr></thead><tbody>");

    for (i, report) in reports.iter().enumerate() {
        let status_str = report.status_str(locale);
        let status_class = report.status_class();

        let output_id = format!("output-{}", i);
        let output_details = if report.is_failure() {
            let escaped_output = escape_html(&report.output);
            format!(
                "<tr id='{}' style='display:none;'><td colspan='4'><pre class='output-content'>{}</pre></td></tr>",
                output_id, escaped_output
            )
        } else {
            String::new()
        };

        let output_toggle = if report.is_failure() {
            format!(
                "<div class='output-toggle' onclick=\"toggleOutput('{}')\">{}</div>",
                output_id,
                t!("html_report.toggle_output", locale = locale)
            )
        } else {
            String::new()
        };

        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", escape_html(&report.name)));
        html.push_str(&format!(
            "<td class='status-col'><div class='status-cell {}'>{}</div>{}</td>",
            status_class, status_str, output_toggle
        ));
        html.push_str(&format!("<td class='count-cell'>{}</td>", report.tests));
        html.push_str(&format!("<td class='count-cell'>{}</td>", report.failures));
        html.push_str("</tr>");
        html.push_str(&output_details);
    }

    html.push_str("</tbody></table>");
    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script></body></html>");

    fs::write(output_path, html)
        .with_context(|| format!("Failed to write HTML report: {}", output_path.display()))?;
    Ok(())
}

/// Renders one summary statistics card / 渲染一个摘要统计卡片
fn summary_item(class: &str, count: u64, label: &str) -> String {
    format!(
        "<div class='summary-item'><span class='count{}'>{}</span><span class='label'>{}</span></div>",
        class, count, label
    )
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
