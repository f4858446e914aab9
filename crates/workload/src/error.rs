//! Error types for workload modules.

use crate::adapter::AdapterError;
use medcare_types::RequestError;
use thiserror::Error;

/// Errors surfaced by a workload module.
#[derive(Debug, Error)]
pub enum WorkloadError {
    /// The adapter rejected or failed the request. Passed through as-is.
    #[error(transparent)]
    Adapter(AdapterError),

    /// The request could not be built.
    #[error("Failed to build request: {0}")]
    Request(#[from] RequestError),

    /// No workload is registered under this name.
    #[error("Unknown workload: {0}")]
    UnknownWorkload(String),
}

impl WorkloadError {
    /// The adapter's own error, if this failure came from the adapter.
    pub fn adapter_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            WorkloadError::Adapter(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
