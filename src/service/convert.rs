//! External transcoder invocation.
//!
//! Conversion hands the input buffer to the transcoding tool over stdin and
//! collects the result from a uniquely named temporary output file; the tool
//! infers the output codec from that file's extension. The tool's stderr is
//! inherited so its diagnostics end up in the bot's own log output.
//!
//! Every call gets a fresh UUID-based file name, so concurrent conversions
//! never collide on disk. The temporary file is removed on success and
//! best-effort on every failure path, including timeout.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use uuid::Uuid;

use crate::error::convert::ConvertError;

/// Converts an in-memory media buffer to a target format.
#[async_trait]
pub trait MediaConverter: Send + Sync {
    /// Converts `input` to the format implied by `extension`.
    ///
    /// One best-effort attempt per call; no retries.
    ///
    /// # Arguments
    /// - `input` - Binary media content of arbitrary type
    /// - `extension` - Target file extension, e.g. `webp` or `ogg`
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - The converted file's bytes
    /// - `Err(ConvertError)` - The tool could not be run or produced no output
    async fn convert(&self, input: &[u8], extension: &str) -> Result<Vec<u8>, ConvertError>;
}

/// `MediaConverter` backed by the ffmpeg command-line tool.
pub struct FfmpegConverter {
    command: String,
    work_dir: PathBuf,
    timeout: Duration,
}

impl FfmpegConverter {
    /// Creates a new converter.
    ///
    /// # Arguments
    /// - `command` - The transcoder binary to invoke, usually `ffmpeg`
    /// - `work_dir` - Directory for temporary output files
    /// - `timeout` - Wall-clock budget per conversion; the child is killed on
    ///   expiry
    pub fn new(command: impl Into<String>, work_dir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            work_dir: work_dir.into(),
            timeout,
        }
    }

    /// Builds a fresh output path that no other call can be using.
    fn output_path(&self, extension: &str) -> PathBuf {
        self.work_dir.join(format!("{}.{}", Uuid::new_v4(), extension))
    }
}

#[async_trait]
impl MediaConverter for FfmpegConverter {
    async fn convert(&self, input: &[u8], extension: &str) -> Result<Vec<u8>, ConvertError> {
        let output_path = self.output_path(extension);

        let mut child = Command::new(&self.command)
            .arg("-i")
            .arg("-")
            .arg(&output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ConvertError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            ConvertError::StdinWrite(io::Error::other("child stdin was not captured"))
        })?;

        let run = async {
            stdin
                .write_all(input)
                .await
                .map_err(ConvertError::StdinWrite)?;
            // Dropping stdin closes the pipe, signalling end of input
            drop(stdin);

            child.wait().await.map_err(ConvertError::Wait)
        };

        let result = tokio::time::timeout(self.timeout, run).await;

        let status = match result {
            Ok(Ok(status)) => status,
            Ok(Err(err)) => {
                let _ = child.kill().await;
                remove_temp_file(&output_path).await;
                return Err(err);
            }
            Err(_) => {
                let _ = child.kill().await;
                remove_temp_file(&output_path).await;
                return Err(ConvertError::Timeout(self.timeout));
            }
        };

        if !status.success() {
            remove_temp_file(&output_path).await;
            return Err(ConvertError::ExitStatus(status));
        }

        let bytes = match tokio::fs::read(&output_path).await {
            Ok(bytes) => bytes,
            Err(source) => {
                remove_temp_file(&output_path).await;
                return Err(ConvertError::MissingOutput {
                    path: output_path,
                    source,
                });
            }
        };

        remove_temp_file(&output_path).await;

        Ok(bytes)
    }
}

/// Removes a temporary output file, logging anything unexpected.
async fn remove_temp_file(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        if err.kind() != io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove temporary file {:?}: {}", path, err);
        }
    }
}
