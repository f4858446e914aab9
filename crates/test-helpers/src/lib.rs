//! Test helpers for medcare workloads.
//!
//! Provides adapters that record or fail every request, and a shortcut for
//! building a [`WorkloadContext`] on a pinned clock.

use async_trait::async_trait;
use medcare_types::{TransactionRequest, TxStatus, WorkerIndex};
use medcare_workload::{AdapterError, FixedClock, SutAdapter, WorkloadContext};
use parking_lot::Mutex;
use std::sync::Arc;

/// Adapter that keeps every request it receives and acknowledges it.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    requests: Mutex<Vec<TransactionRequest>>,
}

impl RecordingAdapter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<TransactionRequest> {
        self.requests.lock().clone()
    }

    /// Number of calls to `send_requests`.
    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl SutAdapter for RecordingAdapter {
    async fn send_requests(&self, request: TransactionRequest) -> Result<TxStatus, AdapterError> {
        let mut requests = self.requests.lock();
        let status = TxStatus::success(format!("tx-{}", requests.len()));
        requests.push(request);
        Ok(status)
    }
}

/// Error returned by [`FailingAdapter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("endorsement failed: {0}")]
pub struct EndorsementError(pub String);

/// Adapter that rejects every request after recording it.
#[derive(Debug)]
pub struct FailingAdapter {
    message: String,
    calls: Mutex<usize>,
}

impl FailingAdapter {
    pub fn new(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            message: message.into(),
            calls: Mutex::new(0),
        })
    }

    /// Number of calls to `send_requests`.
    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl SutAdapter for FailingAdapter {
    async fn send_requests(&self, _request: TransactionRequest) -> Result<TxStatus, AdapterError> {
        *self.calls.lock() += 1;
        Err(Box::new(EndorsementError(self.message.clone())))
    }
}

/// Context for `worker` sending to `adapter`, with the clock stopped at `millis`.
///
/// Unit tests inside `medcare-workload` keep their own copy in
/// `workloads::test_support`: through the dev-dependency cycle this crate links
/// a second `medcare-workload` whose traits differ from the unit tests' crate.
pub fn context_at(
    worker: u32,
    adapter: Arc<dyn SutAdapter>,
    millis: u64,
) -> (WorkloadContext, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(millis));
    let ctx = WorkloadContext::new(WorkerIndex(worker), adapter).with_clock(clock.clone());
    (ctx, clock)
}
