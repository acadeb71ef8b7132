use std::io;
use std::process::ExitStatus;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write generated code: {0}")]
    Io(#[from] io::Error),
}

/// Why the Go formatter could not produce output. Never fatal for an export.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("formatting is disabled")]
    Disabled,

    #[error("failed to run formatter `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("i/o error talking to formatter `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("formatter `{command}` exited with {status}: {stderr}")]
    Rejected {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("formatter output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

#[derive(Debug, Error)]
pub enum DesignError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid design file: {0}")]
    Json(#[from] serde_json::Error),
}
