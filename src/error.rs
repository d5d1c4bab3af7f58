//! Process-level errors for the `fx` binary.
//!
//! Query failures (bad format, unreachable source, missing table, empty
//! series) are not errors at this level; they travel as `QueryFailure` values
//! and only become an `AppError` when the binary decides on an exit code.

/// Exit code used when a query produced a failure result.
pub const EXIT_QUERY_FAILED: u8 = 1;
/// Exit code used for configuration and export problems.
pub const EXIT_CONFIG: u8 = 2;

#[derive(Clone, PartialEq, Eq)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    /// A failure whose message has already been shown to the user.
    pub fn reported() -> Self {
        Self::new(EXIT_QUERY_FAILED, String::new())
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
