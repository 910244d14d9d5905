//! Async bridge between the UI thread and the backend.
//!
//! The UI loop is synchronous; every backend call runs on the tokio
//! runtime inside this worker. Commands come in over a tokio channel,
//! results go back to the UI as [`AppEvent`]s over the event channel.
//! If the UI is gone by the time a result arrives, the send fails and
//! the result is silently discarded.

use std::sync::mpsc;
use std::sync::Arc;

use tokio::sync::mpsc as tokio_mpsc;
use tokio::task::JoinHandle;

use crate::backend::QuoteBackend;
use crate::ui::events::AppEvent;

/// Commands the UI can issue to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    /// One-shot counter read (issued once at startup).
    FetchCounter,
    /// Start a generation cycle. `seq` tags the cycle so the UI can drop
    /// results from superseded activations.
    GenerateQuote { seq: u64 },
}

pub type WorkerCommandSender = tokio_mpsc::Sender<WorkerCommand>;

pub struct Worker {
    backend: Arc<dyn QuoteBackend>,
    query_name: String,
}

impl Worker {
    pub fn new(backend: Arc<dyn QuoteBackend>, query_name: String) -> Self {
        Self {
            backend,
            query_name,
        }
    }

    /// Process commands until the command channel closes.
    pub async fn run(
        self,
        mut commands: tokio_mpsc::Receiver<WorkerCommand>,
        events: mpsc::Sender<AppEvent>,
    ) {
        // At most one generation call in flight. A new GenerateQuote
        // aborts the previous one (restart policy); its result would be
        // dropped by the UI anyway because of the stale sequence number.
        let mut in_flight: Option<JoinHandle<()>> = None;

        while let Some(command) = commands.recv().await {
            match command {
                WorkerCommand::FetchCounter => {
                    let backend = Arc::clone(&self.backend);
                    let query_name = self.query_name.clone();
                    let events = events.clone();
                    tokio::spawn(async move {
                        match backend.fetch_counter(&query_name).await {
                            Ok(record) => {
                                tracing::info!(
                                    count = record.quotes_generated,
                                    "counter loaded"
                                );
                                let _ = events
                                    .send(AppEvent::CounterLoaded(record.quotes_generated));
                            }
                            Err(err) => {
                                // Swallowed: the displayed count keeps its
                                // previous value, no user-facing error.
                                tracing::warn!(
                                    kind = err.kind(),
                                    error = %err,
                                    "counter fetch failed"
                                );
                            }
                        }
                    });
                }
                WorkerCommand::GenerateQuote { seq } => {
                    if let Some(handle) = in_flight.take() {
                        handle.abort();
                    }
                    let backend = Arc::clone(&self.backend);
                    let events = events.clone();
                    in_flight = Some(tokio::spawn(async move {
                        match backend.generate_quote().await {
                            Ok(generated) => {
                                let _ = events.send(AppEvent::QuoteGenerated {
                                    seq,
                                    quote: generated.quote_text,
                                    count: generated.quotes_generated,
                                });
                            }
                            Err(err) => {
                                tracing::warn!(
                                    kind = err.kind(),
                                    error = %err,
                                    seq,
                                    "quote generation failed"
                                );
                                let _ = events.send(AppEvent::QuoteFailed {
                                    seq,
                                    message: err.to_string(),
                                });
                            }
                        }
                    }));
                }
            }
        }
    }
}
