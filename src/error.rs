use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything a single command can fail with. None of these end the shell.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("both arguments must be numbers")]
    NotANumber,

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulus by zero")]
    ModulusByZero,

    #[error("{0} is out of integer range")]
    OutOfRange(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown command: {0}. Type 'help' for available commands")]
    UnknownCommand(String),

    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown command in pipeline: {0}")]
    UnknownStage(String),

    #[error("pipeline stage {0} is empty")]
    EmptyStage(usize),

    #[error("pipeline stage {stage} ({name}) failed: {source}")]
    Pipeline {
        stage: usize,
        name: String,
        #[source]
        source: Box<ShellError>,
    },
}

impl ShellError {
    pub fn usage(msg: impl Into<String>) -> Self {
        ShellError::Usage(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ShellError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
