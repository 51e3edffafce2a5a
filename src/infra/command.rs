use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::core::models::CommandOutput;

/// Spawns a command and captures its stdout and stderr into separate buffers.
/// The output streams are read concurrently while the process runs, so a
/// child that fills one pipe before the other cannot deadlock the caller.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The captured stdout as a `String`.
/// - The captured stderr as a `String`.
///
/// 派生一个命令，将其 stdout 和 stderr 捕获到两个独立的缓冲区中。
/// 进程运行期间并发读取输出流，因此先填满其中一个管道的子进程
/// 不会使调用者死锁。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
///
/// # Returns
/// 一个元组，包含：
/// - 进程的 `ExitStatus`（包装在 `io::Result` 中）。
/// - 捕获的 stdout，为一个 `String`。
/// - 捕获的 stderr，为一个 `String`。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String, String) {
    // Configure the command to capture stdout and stderr.
    // 配置命令以捕获 stdout 和 stderr。
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, we return the error and empty output buffers.
            // 如果派生失败，我们返回错误和空的输出缓冲区。
            return (Err(e), String::new(), String::new());
        }
    };

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return (
                Err(std::io::Error::other("failed to capture stdout")),
                String::new(),
                String::new(),
            );
        }
    };
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => {
            return (
                Err(std::io::Error::other("failed to capture stderr")),
                String::new(),
                String::new(),
            );
        }
    };

    // Read each stream line by line in its own task and hand the buffer back.
    // 在各自的任务中逐行读取每个流，并返回缓冲区。
    let stdout_handle = tokio::spawn(async move {
        let reader = BufReader::new(stdout);
        let mut lines = reader.lines();
        let mut buffer = String::new();
        while let Ok(Some(line)) = lines.next_line().await {
            buffer.push_str(&line);
            buffer.push('\n');
        }
        buffer
    });
    let stderr_handle = tokio::spawn(async move {
        let reader = BufReader::new(stderr);
        let mut lines = reader.lines();
        let mut buffer = String::new();
        while let Ok(Some(line)) = lines.next_line().await {
            buffer.push_str(&line);
            buffer.push('\n');
        }
        buffer
    });

    // Wait for the process to exit.
    // 等待进程退出。
    let status = child.wait().await;

    // Wait for the reader tasks to complete to ensure all output is captured.
    // 等待读取任务完成，以确保所有输出都被捕获。
    let stdout_buffer = stdout_handle.await.unwrap_or_default();
    let stderr_buffer = stderr_handle.await.unwrap_or_default();

    (status, stdout_buffer, stderr_buffer)
}

/// Runs an external command to completion inside `cwd`, returning its captured
/// output. A non-zero exit is not an error: it is reported as
/// `CommandOutput { success: false, .. }`. Only configuration problems — a
/// missing working directory or an unspawnable executable — produce an `Err`.
///
/// 在 `cwd` 中运行一个外部命令直至结束，并返回其捕获的输出。
/// 非零退出码不是错误：它被报告为 `CommandOutput { success: false, .. }`。
/// 只有配置问题（工作目录缺失或可执行文件无法派生）才会产生 `Err`。
pub async fn run_command(
    program: impl AsRef<OsStr>,
    args: &[&str],
    cwd: &Path,
    env: Option<&HashMap<String, String>>,
) -> Result<CommandOutput> {
    if !cwd.is_dir() {
        bail!("working directory does not exist: {}", cwd.display());
    }

    let mut cmd = tokio::process::Command::new(&program);
    cmd.args(args).kill_on_drop(true).current_dir(cwd);
    if let Some(vars) = env {
        cmd.envs(vars);
    }

    let (status_res, stdout, stderr) = spawn_and_capture(cmd).await;
    let status = status_res.with_context(|| {
        format!(
            "failed to execute '{}'",
            program.as_ref().to_string_lossy()
        )
    })?;

    Ok(CommandOutput {
        success: status.success(),
        stdout,
        stderr,
    })
}
