//! Child-process execution under a wall-clock timeout.

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::{debug, info};

/// Cap on captured bytes per stream. A pathological submission printing
/// forever is drained but truncated, so capture memory stays bounded.
pub const MAX_CAPTURE_BYTES: usize = 1024 * 1024;

const TRUNCATION_MARKER: &str = "\n...[output truncated]";

/// Raw outcome of one child-process invocation. Never mutated after capture.
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
    pub signal: Option<i32>,
    pub timed_out: bool,
}

/// Run `command` under `sh -c` with the working directory set to `dir`,
/// forcibly terminating the whole process group once `timeout` elapses.
///
/// `Err` means the process could not be spawned or awaited at all; anything
/// the child itself did wrong comes back inside the outcome.
pub async fn run(command: &str, dir: &Path, timeout: Duration) -> io::Result<ExecutionOutcome> {
    debug!(command, dir = %dir.display(), "spawning child");

    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .process_group(0)
        .kill_on_drop(true)
        .spawn()?;

    let stdout_task = tokio::spawn(read_capped(child.stdout.take()));
    let stderr_task = tokio::spawn(read_capped(child.stderr.take()));

    let mut timed_out = false;
    let status = match tokio::time::timeout(timeout, child.wait()).await {
        Ok(status) => Some(status?),
        Err(_) => {
            timed_out = true;
            info!(command, timeout_ms = timeout.as_millis() as u64, "execution timed out");
            kill_process_group(&child);
            let _ = child.wait().await;
            None
        }
    };

    // The readers finish once the pipes close.
    let stdout = stdout_task.await.unwrap_or_default();
    let stderr = stderr_task.await.unwrap_or_default();

    let (exit_code, signal) = match status {
        Some(status) => (status.code(), status.signal()),
        None => (None, None),
    };

    debug!(
        exit_code = ?exit_code,
        signal = ?signal,
        timed_out,
        stdout_len = stdout.len(),
        stderr_len = stderr.len(),
        "child finished"
    );

    Ok(ExecutionOutcome {
        stdout,
        stderr,
        exit_code,
        signal,
        timed_out,
    })
}

/// SIGKILL the child's whole process group. The negative pid covers the
/// shell and everything it spawned (compile && run included).
fn kill_process_group(child: &Child) {
    if let Some(pid) = child.id() {
        unsafe {
            libc::kill(-(pid as i32), libc::SIGKILL);
        }
    }
}

/// Drain a pipe to completion, keeping at most `MAX_CAPTURE_BYTES`. The
/// stream is read past the cap so the child never blocks on a full pipe.
async fn read_capped<R: AsyncRead + Unpin>(reader: Option<R>) -> String {
    let Some(mut reader) = reader else {
        return String::new();
    };
    let mut buf: Vec<u8> = Vec::new();
    let mut truncated = false;
    let mut chunk = [0u8; 8192];
    loop {
        match reader.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                if buf.len() < MAX_CAPTURE_BYTES {
                    let take = n.min(MAX_CAPTURE_BYTES - buf.len());
                    buf.extend_from_slice(&chunk[..take]);
                    if take < n {
                        truncated = true;
                    }
                } else {
                    truncated = true;
                }
            }
        }
    }
    let mut out = String::from_utf8_lossy(&buf).into_owned();
    if truncated {
        out.push_str(TRUNCATION_MARKER);
    }
    out
}
