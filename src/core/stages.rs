//! # Pipeline Stages Module / 流水线阶段模块
//!
//! This module implements the clean, configure, and build stages of the
//! pipeline. Each stage is a function of the directory state: it invokes its
//! fixed external command, prints localized progress, and reports success or
//! failure with diagnostics instead of raising. Hard errors are reserved for
//! configuration problems (unremovable directories, unspawnable tools).
//!
//! 此模块实现流水线的清理、配置和构建阶段。每个阶段都是目录状态的函数：
//! 它调用固定的外部命令，打印本地化的进度，并以诊断信息报告成功或失败
//! 而不是抛出异常。硬错误仅用于配置问题（无法删除的目录、无法派生的工具）。

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::core::models::StageOutcome;
use crate::infra::{command, fs, t};
use crate::reporting::console::print_stage_banner;

/// Name of the test source directory below the project root.
/// 项目根目录下测试源码目录的名称。
pub const TESTS_DIR_NAME: &str = "tests";

/// Name of the build directory below the tests directory.
/// 测试目录下构建目录的名称。
pub const BUILD_DIR_NAME: &str = "build";

/// The fixed configuration command, run inside the build directory.
/// 固定的配置命令，在构建目录中运行。
pub const CONFIGURE_COMMAND: [&str; 2] = ["cmake", ".."];

/// The fixed build command, run inside the build directory.
/// 固定的构建命令，在构建目录中运行。
pub const BUILD_COMMAND: [&str; 1] = ["make"];

/// Removes the build directory if it exists. Idempotent: a missing directory
/// is a no-op success, so running the stage twice in a row never errors.
///
/// 如果构建目录存在则删除它。幂等：目录不存在时视为无操作的成功，
/// 因此连续运行两次该阶段不会出错。
pub fn clean(build_dir: &Path) -> Result<()> {
    print_stage_banner(&t!("stage.clean_banner"));

    if build_dir.exists() {
        println!(
            "{}",
            t!("stage.clean_removing", path = build_dir.display()).blue()
        );
        fs::remove_dir_recursive(build_dir)?;
        println!("{}", t!("stage.clean_removed").green());
    } else {
        println!("{}", t!("stage.clean_nothing").blue());
    }
    Ok(())
}

/// Ensures the build directory exists, then runs the configuration command
/// inside it. The stage fails when the tool exits non-zero; its captured
/// stderr is carried in the outcome for the caller to surface.
///
/// 确保构建目录存在，然后在其中运行配置命令。
/// 工具以非零状态退出时阶段失败；其捕获的 stderr 随结果携带，
/// 由调用者呈现。
pub async fn configure(build_dir: &Path) -> Result<StageOutcome> {
    print_stage_banner(&t!("stage.configure_banner"));

    fs::ensure_directory(build_dir)?;

    println!(
        "{}",
        t!(
            "stage.configure_running",
            command = CONFIGURE_COMMAND.join(" "),
            path = build_dir.display()
        )
        .blue()
    );

    let output =
        command::run_command(CONFIGURE_COMMAND[0], &CONFIGURE_COMMAND[1..], build_dir, None).await?;

    if output.success {
        println!("{}", t!("stage.configure_ok").green());
        Ok(StageOutcome::Success {
            detail: String::new(),
        })
    } else {
        println!("{}", t!("stage.configure_failed").red());
        Ok(StageOutcome::Failed {
            output: output.stderr,
        })
    }
}

/// Runs the build command inside the already-configured build directory.
/// On success, stdout lines naming built targets are echoed as a cosmetic
/// summary; they play no part in the pass/fail decision.
///
/// 在已配置的构建目录中运行构建命令。
/// 成功时，stdout 中指明构建目标的行会作为外观性摘要回显；
/// 它们不参与通过/失败的判定。
pub async fn build(build_dir: &Path) -> Result<StageOutcome> {
    print_stage_banner(&t!("stage.build_banner"));

    println!(
        "{}",
        t!("stage.build_running", command = BUILD_COMMAND.join(" ")).blue()
    );

    let output = command::run_command(BUILD_COMMAND[0], &BUILD_COMMAND[1..], build_dir, None).await?;

    if output.success {
        println!("{}", t!("stage.build_ok").green());
        let targets = extract_built_targets(&output.stdout);
        for target in &targets {
            println!("  {}", target);
        }
        Ok(StageOutcome::Success {
            detail: targets.join("\n"),
        })
    } else {
        println!("{}", t!("stage.build_failed").red());
        Ok(StageOutcome::Failed {
            output: output.stderr,
        })
    }
}

/// Extracts the stdout lines that name built or in-progress targets,
/// e.g. `[100%] Built target test_math`.
///
/// 提取 stdout 中指明已构建或正在构建目标的行，
/// 例如 `[100%] Built target test_math`。
pub fn extract_built_targets(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.contains("Built target") || line.contains("Building"))
        .map(|line| line.trim().to_string())
        .collect()
}
