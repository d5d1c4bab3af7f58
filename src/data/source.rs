use crate::debug::Diagnostics;
use crate::domain::{FailureKind, QueryFailure, RawRow};

/// Anything that can hand back the rows of the rate table.
pub trait RateTableSource {
    fn fetch_rows(&self, diag: &dyn Diagnostics) -> Result<Vec<RawRow>, SourceError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The request never produced a response.
    Transport(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The page had no table at all (an empty table is not this error).
    TableNotFound,
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Transport(msg) => write!(f, "Rate page request failed: {msg}"),
            SourceError::Status(code) => write!(f, "Rate page request failed with status {code}"),
            SourceError::TableNotFound => f.write_str(crate::domain::TABLE_NOT_FOUND_MESSAGE),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<SourceError> for QueryFailure {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::TableNotFound => QueryFailure::table_not_found(),
            other => QueryFailure::new(FailureKind::SourceUnavailable, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_failure_kinds() {
        let failure: QueryFailure = SourceError::Status(503).into();
        assert_eq!(failure.kind, FailureKind::SourceUnavailable);
        assert_eq!(failure.message, "Rate page request failed with status 503");

        let failure: QueryFailure = SourceError::TableNotFound.into();
        assert_eq!(failure, QueryFailure::table_not_found());
    }
}
