use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    FetchFailed,
    ConfigInvalid,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::FetchFailed => 2,
            ExitCode::ConfigInvalid => 3,
        }
    }
}

#[derive(Debug)]
pub struct ExitError {
    pub code: ExitCode,
    pub err: anyhow::Error,
}

impl ExitError {
    pub fn new(code: ExitCode, err: anyhow::Error) -> Self {
        Self { code, err }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl std::error::Error for ExitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let inner: &(dyn std::error::Error + 'static) = self.err.as_ref();
        inner.source()
    }
}

/// Unwrapped errors are reported the same way as fetch failures.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(exit) = err.downcast_ref::<ExitError>() {
        return exit.code.as_i32();
    }
    ExitCode::FetchFailed.as_i32()
}

pub fn config_invalid(message: impl Into<String>) -> anyhow::Error {
    ExitError::new(ExitCode::ConfigInvalid, anyhow::anyhow!(message.into())).into()
}

pub fn fetch_failed_err(err: anyhow::Error) -> anyhow::Error {
    ExitError::new(ExitCode::FetchFailed, err).into()
}
