//! Query assets by patient.

use crate::config::WorkloadConfig;
use crate::module::{RequestPolicy, WorkloadContext};
use medcare_types::{RequestError, TransactionRequest, TxIndex};

/// Lists every asset recorded for one fixed patient.
#[derive(Debug, Clone)]
pub struct QueryAsset {
    contract_id: String,
    patient: String,
}

impl QueryAsset {
    /// Contract function invoked.
    pub const FUNCTION: &'static str = "QueryAssetByPatient";

    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            contract_id: config.contract_id.clone(),
            patient: config.patient.clone(),
        }
    }
}

impl RequestPolicy for QueryAsset {
    const NAME: &'static str = "queryAsset";

    fn build(
        &self,
        _ctx: &WorkloadContext,
        _tx_index: TxIndex,
    ) -> Result<TransactionRequest, RequestError> {
        TransactionRequest::builder(&self.contract_id, Self::FUNCTION)
            .arg(&self.patient)
            .build()
    }
}
