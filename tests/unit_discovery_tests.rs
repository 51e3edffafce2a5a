//! # Discovery Module Unit Tests / Discovery 模块单元测试
//!
//! This module contains unit tests for test binary discovery: the default
//! candidate predicate, deterministic ordering, and the pluggable predicate
//! hook. Permission-bit semantics are Unix-specific, so the whole file is
//! gated accordingly.
//!
//! 此模块包含测试可执行文件发现的单元测试：默认候选谓词、
//! 确定性排序和可插拔谓词钩子。权限位语义是 Unix 特有的，
//! 因此整个文件按此进行条件编译。
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::tempdir;
use unity_runner::core::discovery::{TEST_BINARY_PREFIX, discover, discover_with};

/// Writes a file with the given permission mode / 以给定权限模式写入文件
fn write_file(dir: &Path, name: &str, mode: u32) {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
}

#[cfg(test)]
mod predicate_tests {
    use super::*;

    #[test]
    fn test_finds_executables_with_prefix_and_no_extension() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "test_math", 0o755);

        let found = discover(dir.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "test_math");
        assert_eq!(found[0].path, dir.path().join("test_math"));
    }

    #[test]
    fn test_skips_files_with_extension() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "test_math", 0o755);
        write_file(dir.path(), "test_math.c", 0o755);
        write_file(dir.path(), "test_math.sh", 0o755);

        let found = discover(dir.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "test_math");
    }

    #[test]
    fn test_skips_non_executable_files() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "test_data", 0o644);

        let found = discover(dir.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_any_execute_bit_is_enough() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "test_owner", 0o744);
        write_file(dir.path(), "test_group", 0o614);
        write_file(dir.path(), "test_other", 0o604);

        let found = discover(dir.path()).unwrap();
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_skips_wrong_prefix() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "helper", 0o755);
        write_file(dir.path(), "run_tests", 0o755);
        write_file(dir.path(), "mytest_a", 0o755);

        let found = discover(dir.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_skips_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("test_fixtures")).unwrap();

        let found = discover(dir.path()).unwrap();
        assert!(found.is_empty());
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn test_results_are_sorted_by_name() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "test_zeta", 0o755);
        write_file(dir.path(), "test_alpha", 0o755);
        write_file(dir.path(), "test_middle", 0o755);

        let found = discover(dir.path()).unwrap();
        let names: Vec<&str> = found.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["test_alpha", "test_middle", "test_zeta"]);
    }

    #[test]
    fn test_empty_directory_yields_empty_sequence() {
        let dir = tempdir().unwrap();
        let found = discover(dir.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no_such_dir");
        assert!(discover(&missing).is_err());
    }
}

#[cfg(test)]
mod pluggable_predicate_tests {
    use super::*;

    #[test]
    fn test_custom_predicate_replaces_default_rule() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "check_math.exe", 0o644);
        write_file(dir.path(), "test_math", 0o755);

        // A predicate for a platform where candidates carry an .exe suffix.
        // 适用于候选文件带 .exe 后缀平台的谓词。
        let found = discover_with(dir.path(), |path, metadata| {
            metadata.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"))
        })
        .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "check_math.exe");
    }

    #[test]
    fn test_prefix_constant_matches_default_rule() {
        assert_eq!(TEST_BINARY_PREFIX, "test_");
    }
}
