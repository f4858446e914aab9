//! Submission adapter seam.
//!
//! The adapter owns everything between a built request and the ledger:
//! endorsement, ordering, transport, timeouts. Workloads only call
//! [`SutAdapter::send_requests`] and await it.

use async_trait::async_trait;
use medcare_types::{TransactionRequest, TxStatus};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Error returned by an adapter. Workloads never inspect or wrap it.
pub type AdapterError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// System-under-test adapter - outbound port.
#[async_trait]
pub trait SutAdapter: Send + Sync {
    /// Submit one request and wait for it to settle.
    async fn send_requests(&self, request: TransactionRequest) -> Result<TxStatus, AdapterError>;
}

type RequestSink = Box<dyn Fn(&TransactionRequest) + Send + Sync>;

/// Adapter that accepts every request without touching a network.
///
/// Each request is logged and handed to an optional sink.
pub struct DryRunAdapter {
    sink: Option<RequestSink>,
    submitted: AtomicU64,
}

impl DryRunAdapter {
    /// Create a dry-run adapter that only logs.
    pub fn new() -> Self {
        Self {
            sink: None,
            submitted: AtomicU64::new(0),
        }
    }

    /// Forward every request to `sink` before acknowledging it.
    pub fn with_sink(mut self, sink: impl Fn(&TransactionRequest) + Send + Sync + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Number of requests accepted so far.
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }
}

impl Default for DryRunAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DryRunAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DryRunAdapter")
            .field("submitted", &self.submitted())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SutAdapter for DryRunAdapter {
    async fn send_requests(&self, request: TransactionRequest) -> Result<TxStatus, AdapterError> {
        let n = self.submitted.fetch_add(1, Ordering::Relaxed);

        info!(
            contract = %request.contract_id,
            function = %request.contract_function,
            args = request.contract_arguments.len(),
            transient = request.transient_map.as_ref().map_or(0, |m| m.len()),
            "Dry-run request"
        );

        if let Some(sink) = &self.sink {
            sink(&request);
        }

        Ok(TxStatus::success(format!("dryrun-{}", n)))
    }
}
