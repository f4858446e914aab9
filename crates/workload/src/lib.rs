//! Benchmark workload modules for the medcare contract.
//!
//! A benchmarking harness creates one [`WorkloadModule`] per simulated
//! worker, awaits [`WorkloadModule::submit_transaction`] once per operation
//! and calls [`WorkloadModule::cleanup_workload_module`] when the round ends.
//! Every module builds exactly one [`TransactionRequest`] per call and hands
//! it to the [`SutAdapter`] it was constructed with.
//!
//! # Example
//!
//! ```ignore
//! use medcare_workload::{create_workload_module, WorkloadConfig, WorkloadContext};
//! use medcare_types::WorkerIndex;
//!
//! let ctx = WorkloadContext::new(WorkerIndex(2), adapter);
//! let mut module = create_workload_module("createAsset", ctx, &WorkloadConfig::default())?;
//!
//! module.submit_transaction().await?;
//! module.cleanup_workload_module().await;
//! ```
//!
//! [`TransactionRequest`]: medcare_types::TransactionRequest

pub mod adapter;
pub mod clock;
pub mod config;
pub mod error;
pub mod module;
pub mod registry;
pub mod workloads;

pub use adapter::{AdapterError, DryRunAdapter, SutAdapter};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, WorkloadConfig};
pub use error::WorkloadError;
pub use module::{RequestPolicy, Workload, WorkloadContext, WorkloadModule};
pub use registry::{create_workload_module, WorkloadKind};
