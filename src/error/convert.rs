use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Failures while running the external transcoding tool.
///
/// All variants surface to the end user as the same generic conversion failure
/// text; the distinction exists for logging only.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The transcoder binary could not be started.
    #[error("Failed to spawn transcoder '{command}': {source}")]
    Spawn {
        /// The command that was invoked
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing the input buffer to the transcoder's stdin failed.
    ///
    /// Usually means the tool rejected the input and exited early.
    #[error("Failed to write input to transcoder stdin: {0}")]
    StdinWrite(#[source] io::Error),

    /// Waiting for the transcoder process failed.
    #[error("Failed to wait for transcoder: {0}")]
    Wait(#[source] io::Error),

    /// The transcoder exited with a non-zero status.
    #[error("Transcoder exited with {0}")]
    ExitStatus(ExitStatus),

    /// The transcoder exited successfully but its output file is missing or
    /// unreadable.
    #[error("Transcoder produced no readable output at {path:?}: {source}")]
    MissingOutput {
        /// Expected output file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The transcoder did not finish within the configured time budget and was
    /// killed.
    #[error("Transcoder timed out after {0:?}")]
    Timeout(Duration),
}
