//! Read one asset by id.

use crate::config::WorkloadConfig;
use crate::module::{RequestPolicy, WorkloadContext};
use medcare_types::{RequestError, TransactionRequest, TxIndex};

/// Reads one fixed asset.
///
/// The contract records every read on the ledger, so this is a submitted
/// transaction rather than an evaluation.
#[derive(Debug, Clone)]
pub struct ReadAsset {
    contract_id: String,
    asset_id: String,
}

impl ReadAsset {
    /// Contract function invoked.
    pub const FUNCTION: &'static str = "ReadAsset";

    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            contract_id: config.contract_id.clone(),
            asset_id: config.asset_id.clone(),
        }
    }
}

impl RequestPolicy for ReadAsset {
    const NAME: &'static str = "readAsset";

    fn build(
        &self,
        _ctx: &WorkloadContext,
        _tx_index: TxIndex,
    ) -> Result<TransactionRequest, RequestError> {
        TransactionRequest::builder(&self.contract_id, Self::FUNCTION)
            .arg(&self.asset_id)
            .build()
    }
}
