//! Core types for medcare benchmark workloads.
//!
//! This crate defines the request shape handed to a ledger submission
//! adapter, the JSON payload carried in transient data, and the small
//! identifiers a workload instance carries between calls.

mod asset;
mod identifiers;
mod request;
mod status;

pub use asset::{AssetProperties, ASSET_PROPERTIES_KEY};
pub use identifiers::{TxIndex, WorkerIndex};
pub use request::{RequestError, TransactionRequest, TransactionRequestBuilder, TransientMap};
pub use status::TxStatus;
