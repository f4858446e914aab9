//! Grant an organization access to an asset.

use crate::config::WorkloadConfig;
use crate::module::{RequestPolicy, WorkloadContext};
use medcare_types::{RequestError, TransactionRequest, TxIndex};

/// Adds one organization to a fixed asset's ACL.
#[derive(Debug, Clone)]
pub struct UpdateAcl {
    contract_id: String,
    asset_id: String,
    org: String,
}

impl UpdateAcl {
    /// Contract function invoked.
    pub const FUNCTION: &'static str = "updateAclPermission";

    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            contract_id: config.contract_id.clone(),
            asset_id: config.asset_id.clone(),
            org: config.target_org.clone(),
        }
    }
}

impl RequestPolicy for UpdateAcl {
    const NAME: &'static str = "updateACL";

    fn build(
        &self,
        _ctx: &WorkloadContext,
        _tx_index: TxIndex,
    ) -> Result<TransactionRequest, RequestError> {
        // (assetID, newOrg)
        TransactionRequest::builder(&self.contract_id, Self::FUNCTION)
            .arg(&self.asset_id)
            .arg(&self.org)
            .build()
    }
}
