//! # Binary Discovery Module / 可执行文件发现模块
//!
//! This module scans the build directory for test executables. The candidate
//! predicate is deliberately pluggable: the default rule (execute permission,
//! no extension, `test_` prefix) is tied to Unix permission semantics, and a
//! different target platform can substitute its own rule through
//! [`discover_with`].
//!
//! 此模块在构建目录中扫描测试可执行文件。候选谓词特意设计为可插拔：
//! 默认规则（有执行权限、无扩展名、`test_` 前缀）依赖 Unix 权限语义，
//! 其他目标平台可以通过 [`discover_with`] 替换为自己的规则。

use anyhow::{Context, Result};
use std::fs::{self, Metadata};
use std::path::Path;

use crate::core::models::TestBinary;

/// File name prefix identifying a test executable.
/// 标识测试可执行文件的文件名前缀。
pub const TEST_BINARY_PREFIX: &str = "test_";

/// Scans the direct children of `build_dir` for test executables using the
/// default candidate predicate. Results are sorted by name: filesystem
/// enumeration order is not guaranteed, and a deterministic order keeps runs
/// and their reports comparable.
///
/// An empty result is not an error; the caller treats it as the distinct
/// "no test executables found" condition.
///
/// 使用默认候选谓词扫描 `build_dir` 的直接子项以查找测试可执行文件。
/// 结果按名称排序：文件系统的枚举顺序没有保证，
/// 确定性的顺序使多次运行及其报告可比较。
///
/// 空结果不是错误；调用者将其视为独立的"未找到测试可执行文件"情况。
pub fn discover(build_dir: &Path) -> Result<Vec<TestBinary>> {
    discover_with(build_dir, is_candidate_test_binary)
}

/// Like [`discover`], but with a caller-supplied candidate predicate.
/// 与 [`discover`] 类似，但使用调用者提供的候选谓词。
pub fn discover_with(
    build_dir: &Path,
    is_candidate: impl Fn(&Path, &Metadata) -> bool,
) -> Result<Vec<TestBinary>> {
    let entries = fs::read_dir(build_dir)
        .with_context(|| format!("Failed to read build directory: {}", build_dir.display()))?;

    let mut binaries = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !is_candidate(&path, &metadata) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        binaries.push(TestBinary {
            name: name.to_string(),
            path,
        });
    }

    binaries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(binaries)
}

/// The default candidate predicate: a regular file with any execute
/// permission bit set, no extension, and the `test_` name prefix.
/// On Windows the execute bit and bare-name rules are replaced by an
/// `.exe` suffix check.
///
/// 默认候选谓词：具有任一执行权限位、无扩展名且带 `test_` 名称前缀的
/// 常规文件。在 Windows 上，执行位和无扩展名规则被替换为 `.exe` 后缀检查。
pub fn is_candidate_test_binary(path: &Path, metadata: &Metadata) -> bool {
    metadata.is_file() && is_executable(metadata) && has_candidate_name(path)
}

#[cfg(unix)]
fn is_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &Metadata) -> bool {
    true
}

#[cfg(not(windows))]
fn has_candidate_name(path: &Path) -> bool {
    path.extension().is_none()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(TEST_BINARY_PREFIX))
}

#[cfg(windows)]
fn has_candidate_name(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(TEST_BINARY_PREFIX))
}
