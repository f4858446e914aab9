//! Access-control and erasure workloads beyond the ACL grant.

use crate::config::WorkloadConfig;
use crate::module::{RequestPolicy, WorkloadContext};
use medcare_types::{RequestError, TransactionRequest, TxIndex};

/// Evaluates the ACL of one fixed asset without ordering a transaction.
#[derive(Debug, Clone)]
pub struct ReadAcl {
    contract_id: String,
    asset_id: String,
}

impl ReadAcl {
    /// Contract function invoked.
    pub const FUNCTION: &'static str = "ReadAcl";

    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            contract_id: config.contract_id.clone(),
            asset_id: config.asset_id.clone(),
        }
    }
}

impl RequestPolicy for ReadAcl {
    const NAME: &'static str = "readAcl";

    fn build(
        &self,
        _ctx: &WorkloadContext,
        _tx_index: TxIndex,
    ) -> Result<TransactionRequest, RequestError> {
        TransactionRequest::builder(&self.contract_id, Self::FUNCTION)
            .arg(&self.asset_id)
            .read_only(true)
            .build()
    }
}

/// Removes one organization from a fixed asset's ACL.
#[derive(Debug, Clone)]
pub struct RevokeAcl {
    contract_id: String,
    asset_id: String,
    org: String,
}

impl RevokeAcl {
    /// Contract function invoked.
    pub const FUNCTION: &'static str = "revokeAclPermission";

    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            contract_id: config.contract_id.clone(),
            asset_id: config.asset_id.clone(),
            org: config.target_org.clone(),
        }
    }
}

impl RequestPolicy for RevokeAcl {
    const NAME: &'static str = "revokeACL";

    fn build(
        &self,
        _ctx: &WorkloadContext,
        _tx_index: TxIndex,
    ) -> Result<TransactionRequest, RequestError> {
        TransactionRequest::builder(&self.contract_id, Self::FUNCTION)
            .arg(&self.asset_id)
            .arg(&self.org)
            .build()
    }
}

/// Asks the owner of a fixed asset for access.
#[derive(Debug, Clone)]
pub struct RequestPermission {
    contract_id: String,
    asset_id: String,
    purpose: String,
}

impl RequestPermission {
    /// Contract function invoked.
    pub const FUNCTION: &'static str = "requestPermission";

    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            contract_id: config.contract_id.clone(),
            asset_id: config.asset_id.clone(),
            purpose: config.purpose.clone(),
        }
    }
}

impl RequestPolicy for RequestPermission {
    const NAME: &'static str = "requestPermission";

    fn build(
        &self,
        _ctx: &WorkloadContext,
        _tx_index: TxIndex,
    ) -> Result<TransactionRequest, RequestError> {
        TransactionRequest::builder(&self.contract_id, Self::FUNCTION)
            .arg(&self.asset_id)
            .arg(&self.purpose)
            .build()
    }
}

/// Asks the contract to record the erasure of one fixed asset.
#[derive(Debug, Clone)]
pub struct EraseDataRequest {
    contract_id: String,
    asset_id: String,
}

impl EraseDataRequest {
    /// Contract function invoked.
    pub const FUNCTION: &'static str = "eraseDataRequest";

    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            contract_id: config.contract_id.clone(),
            asset_id: config.asset_id.clone(),
        }
    }
}

impl RequestPolicy for EraseDataRequest {
    const NAME: &'static str = "eraseDataRequest";

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
    fn test_read_acl_is_read_only() {
        let (ctx, _) = context(0, 0);
        let req = ReadAcl::new(&WorkloadConfig::default())
            .build(&ctx, TxIndex::FIRST)
            .unwrap();

        assert_eq!(req.contract_function, "ReadAcl");
        assert_eq!(req.contract_arguments, vec!["phi_mock0"]);
        assert!(req.read_only);
    }

    #[test]
    fn test_revoke_and_request_arguments() {
        let (ctx, _) = context(0, 0);
        let config = WorkloadConfig::default();

        let revoke = RevokeAcl::new(&config).build(&ctx, TxIndex::FIRST).unwrap();
        assert_eq!(revoke.contract_function, "revokeAclPermission");
        assert_eq!(revoke.contract_arguments, vec!["phi_mock0", "Org3MSP"]);
        assert!(!revoke.read_only);

        let request = RequestPermission::new(&config)
            .build(&ctx, TxIndex::FIRST)
            .unwrap();
        assert_eq!(request.contract_function, "requestPermission");
        assert_eq!(request.contract_arguments, vec!["phi_mock0", "benchmark"]);
    }

    #[test]
    fn test_erase_data_request() {
        let (ctx, _) = context(0, 0);
        let req = EraseDataRequest::new(&WorkloadConfig::default())
            .build(&ctx, TxIndex::FIRST)
            .unwrap();

        assert_eq!(req.contract_function, "eraseDataRequest");
        assert_eq!(req.contract_arguments, vec!["phi_mock0"]);
        assert!(req.transient_map.is_none());
        assert!(!req.read_only);
    }
}
