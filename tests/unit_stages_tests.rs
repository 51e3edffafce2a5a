//! # Stages Module Unit Tests / Stages 模块单元测试
//!
//! This module contains unit tests for the pipeline stages that can run
//! without a CMake toolchain: the clean stage and the build target
//! extraction used for the cosmetic build summary.
//!
//! 此模块包含无需 CMake 工具链即可运行的流水线阶段的单元测试：
//! 清理阶段和用于外观性构建摘要的构建目标提取。

use std::fs;
use tempfile::tempdir;
use unity_runner::core::stages::{
    BUILD_COMMAND, CONFIGURE_COMMAND, clean, extract_built_targets,
};

#[cfg(test)]
mod clean_tests {
    use super::*;

    #[test]
    fn test_clean_removes_build_directory() {
        let dir = tempdir().unwrap();
        let build_dir = dir.path().join("build");
        fs::create_dir_all(build_dir.join("CMakeFiles")).unwrap();
        fs::write(build_dir.join("Makefile"), "all:\n").unwrap();

        clean(&build_dir).unwrap();
        assert!(!build_dir.exists());
    }

    #[test]
    fn test_clean_is_idempotent() {
        // Running the stage twice in succession never errors; the second
        // run is a no-op success.
        // 连续运行该阶段两次不会出错；第二次运行是无操作的成功。
        let dir = tempdir().unwrap();
        let build_dir = dir.path().join("build");
        fs::create_dir_all(&build_dir).unwrap();

        clean(&build_dir).unwrap();
        clean(&build_dir).unwrap();
        assert!(!build_dir.exists());
    }

    #[test]
    fn test_clean_on_missing_directory_is_a_noop() {
        let dir = tempdir().unwrap();
        let build_dir = dir.path().join("never_created");

        clean(&build_dir).unwrap();
    }
}

#[cfg(test)]
mod build_summary_tests {
    use super::*;

    #[test]
    fn test_extracts_built_target_lines() {
        let stdout = "\
[ 25%] Building C object CMakeFiles/test_math.dir/test_math.c.o
[ 50%] Linking C executable test_math
[ 50%] Built target test_math
[100%] Built target test_io
";
        let targets = extract_built_targets(stdout);

        assert_eq!(targets.len(), 3);
        assert!(targets[0].contains("Building"));
        assert_eq!(targets[1], "[ 50%] Built target test_math");
        assert_eq!(targets[2], "[100%] Built target test_io");
    }

    #[test]
    fn test_ignores_unrelated_lines() {
        let stdout = "make: Entering directory '/tmp/build'\nmake: Nothing to be done for 'all'.\n";
        assert!(extract_built_targets(stdout).is_empty());
    }

    #[test]
    fn test_command_templates_are_fixed() {
        assert_eq!(CONFIGURE_COMMAND, ["cmake", ".."]);
        assert_eq!(BUILD_COMMAND, ["make"]);
    }
}
