//! # Execution Module Unit Tests / Execution 模块单元测试
//!
//! This module contains unit tests for the sequential suite runner, using
//! shell scripts as stand-ins for Unity test binaries.
//!
//! 此模块包含顺序套件运行器的单元测试，使用 shell 脚本代替 Unity
//! 测试可执行文件。
#![cfg(unix)]

mod common;

use std::path::PathBuf;
use unity_runner::core::discovery::discover;
use unity_runner::core::execution::run_all_suites;
use unity_runner::core::models::TestBinary;
use unity_runner::core::parser::UnityParser;

#[tokio::test]
async fn test_runs_every_suite_in_discovery_order() {
    let project = common::setup_project();
    let build_dir = common::build_dir(&project);
    common::write_fake_suite(&build_dir, "test_math", 0, "8 Tests 0 Failures 0 Ignored");
    common::write_fake_suite(&build_dir, "test_io", 1, "4 Tests 1 Failures 0 Ignored");

    let binaries = discover(&build_dir).unwrap();
    let reports = run_all_suites(&binaries, &build_dir, &UnityParser, false).await;

    assert_eq!(reports.len(), 2);
    // Discovery sorts by name, so test_io comes first.
    // 发现结果按名称排序，因此 test_io 在前。
    assert_eq!(reports[0].name, "test_io");
    assert_eq!(reports[0].failures, 1);
    assert!(!reports[0].passed);
    assert_eq!(reports[1].name, "test_math");
    assert_eq!(reports[1].tests, 8);
    assert!(reports[1].passed);
}

#[tokio::test]
async fn test_crashing_suite_still_yields_a_report() {
    let project = common::setup_project();
    let build_dir = common::build_dir(&project);
    common::write_fake_suite(&build_dir, "test_crash", 139, "");
    common::write_fake_suite(&build_dir, "test_ok", 0, "2 Tests 0 Failures 0 Ignored");

    let binaries = discover(&build_dir).unwrap();
    let reports = run_all_suites(&binaries, &build_dir, &UnityParser, false).await;

    assert_eq!(reports.len(), 2);
    assert!(!reports[0].passed);
    assert!(!reports[0].parsed);
    // The crash does not abort the remaining suites.
    // 崩溃不会中止其余套件。
    assert!(reports[1].passed);
}

#[tokio::test]
async fn test_unspawnable_binary_becomes_a_failed_report() {
    let project = common::setup_project();
    let build_dir = common::build_dir(&project);

    let binaries = vec![TestBinary {
        path: PathBuf::from("/definitely/not/a/real/binary"),
        name: "test_ghost".to_string(),
    }];
    let reports = run_all_suites(&binaries, &build_dir, &UnityParser, false).await;

    assert_eq!(reports.len(), 1);
    assert!(!reports[0].passed);
    assert!(!reports[0].parsed);
    assert_eq!(reports[0].tests, 0);
}

#[tokio::test]
async fn test_no_binaries_yields_no_reports() {
    let project = common::setup_project();
    let build_dir = common::build_dir(&project);

    let reports = run_all_suites(&[], &build_dir, &UnityParser, false).await;
    assert!(reports.is_empty());
}
