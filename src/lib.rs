//! # Unity Runner Library / Unity Runner 库
//!
//! This library provides the core functionality for the Unity Runner tool,
//! a CLI orchestrator that configures, builds, and runs CMake-based Unity
//! test suites and aggregates their reports into a single CI verdict.
//!
//! 此库为 Unity Runner 工具提供核心功能，
//! 这是一个配置、构建并运行基于 CMake 的 Unity 测试套件，
//! 并将其报告汇总为单一 CI 结论的命令行编排器。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, report parsing, discovery, and stage execution
//! - `infra` - Infrastructure services like command execution and file system operations
//! - `reporting` - Run result reporting (console, HTML, JSON)
//! - `cli` - Command-line interface
//! - `commands` - The pipeline driver behind the CLI
//!
//! - `core` - 数据模型、报告解析、发现与阶段执行
//! - `infra` - 基础设施服务，如命令执行和文件系统操作
//! - `reporting` - 运行结果报告（控制台、HTML、JSON）
//! - `cli` - 命令行接口
//! - `commands` - CLI 背后的流水线驱动

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::discovery;
pub use self::core::models;
pub use self::core::parser;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
