//! Asset history lookup.

use crate::config::WorkloadConfig;
use crate::module::{RequestPolicy, WorkloadContext};
use medcare_types::{RequestError, TransactionRequest, TxIndex};

/// Fetches the change history of one fixed asset.
#[derive(Debug, Clone)]
pub struct GetHistory {
    contract_id: String,
    asset_id: String,
}

impl GetHistory {
    /// Contract function invoked.
    pub const FUNCTION: &'static str = "getHistoryForAsset";

    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            contract_id: config.contract_id.clone(),
            asset_id: config.history_asset_id.clone(),
        }
    }
}

impl RequestPolicy for GetHistory {
    const NAME: &'static str = "getHistory";

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workloads::test_support::context;

    #[test]
    fn test_history_request() {
        let (ctx, _) = context(0, 0);
        let req = GetHistory::new(&WorkloadConfig::default())
            .build(&ctx, TxIndex::FIRST)
            .unwrap();

        assert_eq!(req.contract_id, "medcare");
        assert_eq!(req.contract_function, "getHistoryForAsset");
        assert_eq!(req.contract_arguments, vec!["phi_mock0_read"]);
        assert!(req.transient_map.is_none());
    }
}
