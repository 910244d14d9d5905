//! Data types exchanged with the managed quote backend.

use serde::{Deserialize, Serialize};

/// The single persisted counter entity, as stored by the managed backend.
///
/// The app only ever reads this record; the generate operation on the
/// backend is the sole writer. Timestamps are informational and kept as
/// opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCounterRecord {
    pub id: String,
    /// Discriminator for the counter record. This app only uses `"LIVE"`.
    pub query_name: String,
    pub quotes_generated: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Result of the generate operation: the quote text plus the counter
/// value after the backend incremented it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuote {
    pub quote_text: String,
    pub quotes_generated: u64,
}
