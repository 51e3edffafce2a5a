//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Unity Runner,
//! including data models, report parsing, binary discovery, pipeline stages,
//! and suite execution logic.
//!
//! 此模块包含 Unity Runner 的核心功能，
//! 包括数据模型、报告解析、可执行文件发现、流水线阶段和套件执行逻辑。

pub mod discovery;
pub mod execution;
pub mod models;
pub mod parser;
pub mod stages;

// Re-exports
pub use models::{RunSummary, SuiteReport};
pub use parser::{ReportParser, UnityParser};
