//! Error taxonomy for the backend service boundary.
//!
//! Every failure of the read-query or generate capability is classified
//! here. The UI layer never inspects raw transport errors; it only sees
//! these variants.

use thiserror::Error;

/// Errors that can occur when talking to the managed backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Network failure: backend unreachable, connection reset, etc.
    #[error("transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded its deadline.
    #[error("request timeout after {secs}s")]
    Timeout { secs: u64 },

    /// Backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {status}")]
    Upstream { status: u16 },

    /// The GraphQL envelope carried an `errors` array.
    #[error("backend rejected the operation: {message}")]
    Rejected { message: String },

    /// Response deserialized as JSON but the expected fields were missing.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// The read query returned zero items for the requested query name.
    #[error("no counter record for queryName '{query_name}'")]
    MissingRecord { query_name: String },
}

impl BackendError {
    /// Short classification string, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::Transport { .. } => "transport",
            BackendError::Timeout { .. } => "timeout",
            BackendError::Upstream { .. } => "upstream",
            BackendError::Rejected { .. } => "rejected",
            BackendError::Shape(_) => "shape",
            BackendError::MissingRecord { .. } => "missing_record",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_record_names_the_query() {
        let err = BackendError::MissingRecord {
            query_name: "LIVE".to_string(),
        };
        assert_eq!(err.kind(), "missing_record");
        assert!(err.to_string().contains("LIVE"));
    }

    #[test]
    fn timeout_reports_duration() {
        let err = BackendError::Timeout { secs: 30 };
        assert_eq!(err.kind(), "timeout");
        assert_eq!(err.to_string(), "request timeout after 30s");
    }

    #[test]
    fn upstream_reports_status() {
        let err = BackendError::Upstream { status: 502 };
        assert_eq!(err.kind(), "upstream");
        assert!(err.to_string().contains("502"));
    }
}
