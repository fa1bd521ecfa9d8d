//! Runs the external scraper as a child process.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use crate::error::RefreshError;

/// Spawns the configured refresh command and relays its output to the log.
#[derive(Debug, Clone)]
pub struct RefreshRunner {
    command: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl RefreshRunner {
    #[must_use]
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            working_dir: None,
        }
    }

    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Program and arguments, as configured.
    #[must_use]
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Runs the command to completion. Each stdout line is logged at `info`,
    /// each stderr line at `warn`.
    ///
    /// # Errors
    ///
    /// - [`RefreshError::EmptyCommand`] if no program is configured.
    /// - [`RefreshError::Spawn`] if the process cannot be started.
    /// - [`RefreshError::Failed`] if it exits unsuccessfully.
    pub async fn run(&self) -> Result<(), RefreshError> {
        let (program, args) = self.command.split_first().ok_or(RefreshError::EmptyCommand)?;

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        tracing::info!(program = program.as_str(), ?args, "starting refresh command");
        let mut child = command.spawn().map_err(|source| RefreshError::Spawn {
            program: program.clone(),
            source,
        })?;

        let stdout = child.stdout.take().map(|out| tokio::spawn(relay(out, false)));
        let stderr = child.stderr.take().map(|err| tokio::spawn(relay(err, true)));

        let status = child.wait().await.map_err(RefreshError::Wait)?;
        for relay_task in [stdout, stderr].into_iter().flatten() {
            if let Err(e) = relay_task.await {
                tracing::warn!(error = %e, "output relay task failed");
            }
        }

        if status.success() {
            tracing::info!("refresh command completed");
            Ok(())
        } else {
            tracing::error!(code = ?status.code(), "refresh command failed");
            Err(RefreshError::Failed {
                code: status.code(),
            })
        }
    }
}

async fn relay<R>(stream: R, is_stderr: bool)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(stream).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) if is_stderr => tracing::warn!(target: "drhub::refresh", "{line}"),
            Ok(Some(line)) => tracing::info!(target: "drhub::refresh", "{line}"),
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, "stopped reading refresh output");
                break;
            }
        }
    }
}
