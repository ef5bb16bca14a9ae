use std::io::Read;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Configuration for one analyzer invocation.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub command: PathBuf,
    pub args: Vec<String>,
    pub timeout: Option<Duration>,
}

/// Output from a completed analyzer process.
#[derive(Debug)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub signal: Option<i32>,
    /// stdout and stderr merged into one stream, in the order the child
    /// wrote them.
    pub combined: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0 && self.signal.is_none()
    }
}

/// Spawn a child process and capture stdout and stderr merged into a
/// single stream.
///
/// Both handles are attached to the write end of one OS pipe, so the
/// captured bytes keep the interleaving order the child produced. The
/// child is placed in its own process group on Unix; on timeout the
/// whole group is terminated.
pub async fn run_combined(config: ProcessConfig) -> Result<ProcessOutput> {
    let (mut reader, writer) =
        std::io::pipe().map_err(|e| Error::Process(format!("failed to create pipe: {e}")))?;
    let writer_err = writer
        .try_clone()
        .map_err(|e| Error::Process(format!("failed to clone pipe writer: {e}")))?;

    let mut cmd = Command::new(&config.command);
    cmd.args(&config.args)
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(writer_err)
        .kill_on_drop(true);

    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = cmd.spawn().map_err(|e| {
        Error::Process(format!(
            "failed to spawn '{}': {e}",
            config.command.display()
        ))
    })?;

    #[cfg(unix)]
    let pid = child.id();

    // The command still holds the pipe write ends; drop it so the reader
    // sees EOF once the child exits.
    drop(cmd);

    let reader_task = tokio::task::spawn_blocking(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map(|_| buf)
    });

    let status = if let Some(dur) = config.timeout {
        match tokio::time::timeout(dur, child.wait()).await {
            Ok(r) => r.map_err(|e| Error::Process(format!("wait error: {e}")))?,
            Err(_) => {
                #[cfg(unix)]
                if let Some(pid) = pid {
                    unsafe {
                        libc::killpg(pid as i32, libc::SIGTERM);
                    }
                    tokio::time::sleep(Duration::from_millis(500)).await;
                    unsafe {
                        libc::killpg(pid as i32, libc::SIGKILL);
                    }
                }
                return Err(Error::Process(format!("analyzer timed out after {dur:?}")));
            }
        }
    } else {
        child
            .wait()
            .await
            .map_err(|e| Error::Process(format!("wait error: {e}")))?
    };

    let bytes = reader_task
        .await
        .map_err(|e| Error::Process(format!("output reader failed: {e}")))?
        .map_err(|e| Error::Process(format!("failed to read analyzer output: {e}")))?;

    let (exit_code, signal) = extract_exit_info(&status);
    debug!(exit_code, ?signal, "analyzer exited");

    Ok(ProcessOutput {
        exit_code,
        signal,
        combined: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

fn extract_exit_info(status: &std::process::ExitStatus) -> (i32, Option<i32>) {
    if let Some(code) = status.code() {
        return (code, None);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return (128 + sig, Some(sig));
        }
    }
    (-1, None)
}
