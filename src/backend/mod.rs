//! Service boundary to the managed quote backend.
//!
//! The rest of the app depends on the two capabilities in
//! [`QuoteBackend`], never on the wire format. [`GraphQlBackend`] is the
//! only implementation that talks to a real backend; tests provide their
//! own.

mod error;
mod graphql;
mod types;

pub use error::BackendError;
pub use graphql::GraphQlBackend;
pub use types::{GeneratedQuote, QuoteCounterRecord};

use async_trait::async_trait;

/// The two capabilities the app needs from the managed backend.
#[async_trait]
pub trait QuoteBackend: Send + Sync {
    /// Read the counter record matching `query_name`.
    ///
    /// Returns [`BackendError::MissingRecord`] when the backend holds no
    /// record for that name. Never panics on an empty result set.
    async fn fetch_counter(&self, query_name: &str) -> Result<QuoteCounterRecord, BackendError>;

    /// Invoke the remote generate operation.
    ///
    /// Takes no input. Each successful call increments the shared counter
    /// on the backend, so the caller must issue it at most once per user
    /// activation.
    async fn generate_quote(&self) -> Result<GeneratedQuote, BackendError>;
}
