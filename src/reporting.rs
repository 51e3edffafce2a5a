//! # Reporting Module / 报告模块
//!
//! This module handles the presentation of run results in multiple formats:
//! colorful console summaries, a self-contained HTML report, and a
//! machine-readable JSON summary for CI consumers.
//!
//! 此模块处理多种格式的运行结果呈现：
//! 彩色控制台摘要、自包含的 HTML 报告，以及供 CI 消费的机器可读 JSON 摘要。

pub mod console;
pub mod html;
pub mod json;

// Re-export common reporting functions
pub use console::{print_failure_details, print_stage_banner, print_summary};
pub use html::generate_html_report;
pub use json::write_json_summary;
