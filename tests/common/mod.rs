// Shared test helpers for integration tests
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Creates a project tree with `tests/` and `tests/build/` directories,
/// the fixed layout the runner expects below its project root.
pub fn setup_project() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    fs::create_dir_all(temp_dir.path().join("tests").join("build"))
        .expect("Failed to create tests/build directory");
    temp_dir
}

/// The build directory inside a project created by [`setup_project`].
pub fn build_dir(project: &TempDir) -> PathBuf {
    project.path().join("tests").join("build")
}

/// Writes an executable fake test suite into `dir`. The script prints the
/// given report output line by line and exits with the given code, mimicking
/// a Unity test binary.
#[cfg(unix)]
pub fn write_fake_suite(dir: &Path, name: &str, exit_code: i32, output: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let mut script = String::from("#!/bin/sh\n");
    for line in output.lines() {
        script.push_str(&format!("echo '{}'\n", line));
    }
    script.push_str(&format!("exit {}\n", exit_code));
    fs::write(&path, script).expect("Failed to write fake suite");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake suite executable");
    path
}
