//! The workload module contract.

use crate::adapter::SutAdapter;
use crate::clock::{Clock, SystemClock};
use crate::error::WorkloadError;
use async_trait::async_trait;
use medcare_types::{RequestError, TransactionRequest, TxIndex, TxStatus, WorkerIndex};
use std::sync::Arc;
use tracing::{debug, warn};

/// Run-scoped state handed to a workload when it is created.
#[derive(Clone)]
pub struct WorkloadContext {
    /// Index of the worker driving this instance.
    pub worker_index: WorkerIndex,

    /// Number of workers in the round.
    pub total_workers: u32,

    /// Index of the current round.
    pub round_index: u32,

    /// Where requests are sent.
    pub adapter: Arc<dyn SutAdapter>,

    /// Wall-clock source for generated identifiers.
    pub clock: Arc<dyn Clock>,
}

impl WorkloadContext {
    /// Create a context for a single-worker round using the system clock.
    pub fn new(worker_index: WorkerIndex, adapter: Arc<dyn SutAdapter>) -> Self {
        Self {
            worker_index,
            total_workers: 1,
            round_index: 0,
            adapter,
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the number of workers in the round.
    pub fn with_total_workers(mut self, total_workers: u32) -> Self {
        self.total_workers = total_workers;
        self
    }

    /// Set the round index.
    pub fn with_round_index(mut self, round_index: u32) -> Self {
        self.round_index = round_index;
        self
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl std::fmt::Debug for WorkloadContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkloadContext")
            .field("worker_index", &self.worker_index)
            .field("total_workers", &self.total_workers)
            .field("round_index", &self.round_index)
            .finish_non_exhaustive()
    }
}

/// A pluggable benchmark workload.
///
/// The harness awaits each call before issuing the next, which `&mut self`
/// enforces per instance. Instances share nothing but the adapter and clock.
#[async_trait]
pub trait WorkloadModule: Send {
    /// Factory name of this workload.
    fn name(&self) -> &'static str;

    /// The context this instance was created with.
    fn context(&self) -> &WorkloadContext;

    /// Index of the next operation.
    fn tx_index(&self) -> TxIndex;

    /// Build the request the next submission would send.
    fn build_request(&self) -> Result<TransactionRequest, WorkloadError>;

    /// Build one request, send it, and wait for the adapter to settle.
    ///
    /// Adapter failures are returned unchanged; nothing is retried.
    async fn submit_transaction(&mut self) -> Result<TxStatus, WorkloadError>;

    /// End-of-round teardown. Never fails and never talks to the adapter.
    async fn cleanup_workload_module(&mut self) {}
}

/// How a workload variant shapes its request.
pub trait RequestPolicy: Send + Sync + 'static {
    /// Factory name of the variant.
    const NAME: &'static str;

    /// Build the request for one operation.
    fn build(
        &self,
        ctx: &WorkloadContext,
        tx_index: TxIndex,
    ) -> Result<TransactionRequest, RequestError>;
}

/// A workload module driven by a [`RequestPolicy`].
pub struct Workload<P> {
    ctx: WorkloadContext,
    tx_index: TxIndex,
    policy: P,
}

impl<P: RequestPolicy> Workload<P> {
    /// Create a workload instance for one worker.
    pub fn new(ctx: WorkloadContext, policy: P) -> Self {
        Self {
            ctx,
            tx_index: TxIndex::FIRST,
            policy,
        }
    }

    /// The request policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

#[async_trait]
impl<P: RequestPolicy> WorkloadModule for Workload<P> {
    fn name(&self) -> &'static str {
        P::NAME
    }

    fn context(&self) -> &WorkloadContext {
        &self.ctx
    }

    fn tx_index(&self) -> TxIndex {
        self.tx_index
    }

    fn build_request(&self) -> Result<TransactionRequest, WorkloadError> {
        Ok(self.policy.build(&self.ctx, self.tx_index)?)
    }

    async fn submit_transaction(&mut self) -> Result<TxStatus, WorkloadError> {
        let request = self.build_request()?;
        let tx_index = self.tx_index;

        debug!(
            workload = P::NAME,
            worker = %self.ctx.worker_index,
            tx = tx_index.get(),
            function = %request.contract_function,
            "Submitting transaction"
        );

        let result = self.ctx.adapter.send_requests(request).await;
        self.tx_index = tx_index.next();

        result.map_err(|e| {
            warn!(
                workload = P::NAME,
                worker = %self.ctx.worker_index,
                tx = tx_index.get(),
                error = %e,
                "Adapter failed request"
            );
            WorkloadError::Adapter(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{AdapterError, DryRunAdapter};
    use crate::config::WorkloadConfig;
    use crate::workloads::{CreateAsset, ReadAsset};
    use tracing_test::traced_test;

    struct Unreachable;

    #[async_trait]
    impl SutAdapter for Unreachable {
        async fn send_requests(
            &self,
            _request: TransactionRequest,
        ) -> Result<TxStatus, AdapterError> {
            Err("connection refused".into())
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_submit_logs_and_advances() {
        let adapter = Arc::new(DryRunAdapter::new());
        let ctx = WorkloadContext::new(WorkerIndex(1), adapter.clone());
        let mut workload = Workload::new(ctx, ReadAsset::new(&WorkloadConfig::default()));

        assert_eq!(workload.tx_index(), TxIndex::FIRST);
        let status = workload.submit_transaction().await.unwrap();

        assert_eq!(status.tx_id.as_deref(), Some("dryrun-0"));
        assert_eq!(workload.tx_index(), TxIndex(1));
        assert_eq!(adapter.submitted(), 1);
        assert!(logs_contain("Submitting transaction"));
    }

    struct Responding;

    #[async_trait]
    impl SutAdapter for Responding {
        async fn send_requests(
            &self,
            request: TransactionRequest,
        ) -> Result<TxStatus, AdapterError> {
            Ok(TxStatus::success("tx-7").with_result(request.contract_arguments.join(",")))
        }
    }

    #[tokio::test]
    async fn test_adapter_result_passed_through() {
        let ctx = WorkloadContext::new(WorkerIndex(0), Arc::new(Responding));
        let mut workload = Workload::new(ctx, ReadAsset::new(&WorkloadConfig::default()));

        let status = workload.submit_transaction().await.unwrap();
        assert_eq!(status, TxStatus::success("tx-7").with_result("phi_mock0"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_adapter_failure_not_retried() {
        let ctx = WorkloadContext::new(WorkerIndex(0), Arc::new(Unreachable));
        let mut workload = Workload::new(ctx, ReadAsset::new(&WorkloadConfig::default()));

        let err = workload.submit_transaction().await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(workload.tx_index(), TxIndex(1));
        assert!(logs_contain("Adapter failed request"));
    }

    #[test]
    fn test_each_submission_builds_a_fresh_request() {
        let ctx = WorkloadContext::new(WorkerIndex(0), Arc::new(DryRunAdapter::new()));
        let workload = Workload::new(ctx, CreateAsset::new(&WorkloadConfig::default()));

        let mut first = workload.build_request().unwrap();
        let second = workload.build_request().unwrap();
        first.contract_arguments.push("mutated".into());

        assert!(second.contract_arguments.is_empty());
        assert_eq!(workload.name(), "createAsset");
    }

    #[test]
    fn test_policy_accessor() {
        let ctx = WorkloadContext::new(WorkerIndex(4), Arc::new(DryRunAdapter::new()));
        let workload = Workload::new(ctx, CreateAsset::new(&WorkloadConfig::default()));

        assert_eq!(
            workload.policy().asset_id(WorkerIndex(4), 77),
            "caliper_test4_77"
        );
        assert_eq!(workload.context().worker_index, WorkerIndex(4));
    }

    #[test]
    fn test_context_builders() {
        let ctx = WorkloadContext::new(WorkerIndex(3), Arc::new(DryRunAdapter::new()))
            .with_total_workers(8)
            .with_round_index(2);

        assert_eq!(ctx.total_workers, 8);
        assert_eq!(ctx.round_index, 2);
        assert!(format!("{:?}", ctx).contains("worker_index: WorkerIndex(3)"));
    }
}
