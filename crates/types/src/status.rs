//! Result reported by a submission adapter.

use serde::{Deserialize, Serialize};

/// Outcome of one submitted request.
///
/// The content is adapter-defined; workloads pass it through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxStatus {
    /// Ledger transaction id, if the adapter knows it.
    pub tx_id: Option<String>,
    /// Whether the ledger accepted the transaction.
    pub succeeded: bool,
    /// Raw contract response.
    #[serde(default)]
    pub result: Vec<u8>,
}

impl TxStatus {
    /// A successful status with no payload.
    pub fn success(tx_id: impl Into<String>) -> Self {
        Self {
            tx_id: Some(tx_id.into()),
            succeeded: true,
            result: Vec::new(),
        }
    }

    /// Attach the contract response.
    pub fn with_result(mut self, result: impl Into<Vec<u8>>) -> Self {
        self.result = result.into();
        self
    }

    /// Check if the submission was successful.
    pub fn is_success(&self) -> bool {
        self.succeeded
    }
}
