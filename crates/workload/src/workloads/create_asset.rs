//! Asset creation workload.

use crate::config::WorkloadConfig;
use crate::module::{RequestPolicy, WorkloadContext};
use medcare_types::{
    AssetProperties, RequestError, TransactionRequest, TxIndex, WorkerIndex, ASSET_PROPERTIES_KEY,
};
use tracing::trace;

/// Creates a new asset per call.
///
/// The asset travels in the transient map so its properties stay off the
/// replicated ledger. Asset ids are `<prefix><worker>_<millis>`: two calls on
/// one worker inside the same millisecond produce the same id, and the second
/// is rejected by the contract as a duplicate. Nothing is cleaned up after a
/// round.
#[derive(Debug, Clone)]
pub struct CreateAsset {
    contract_id: String,
    asset_id_prefix: String,
    pointer: String,
    data_subject: String,
    version: u32,
    filekey: String,
    acl: Vec<String>,
}

impl CreateAsset {
    /// Contract function invoked.
    pub const FUNCTION: &'static str = "CreateAsset";

    pub fn new(config: &WorkloadConfig) -> Self {
        Self {
            contract_id: config.contract_id.clone(),
            asset_id_prefix: config.asset_id_prefix.clone(),
            pointer: config.pointer.clone(),
            data_subject: config.data_subject.clone(),
            version: config.version,
            filekey: config.filekey.clone(),
            acl: config.acl.clone(),
        }
    }

    /// Asset id for `worker` at wall-clock time `millis`.
    pub fn asset_id(&self, worker: WorkerIndex, millis: u64) -> String {
        format!("{}{}_{}", self.asset_id_prefix, worker, millis)
    }

    /// Properties of the asset created for `asset_id`.
    pub fn properties(&self, asset_id: String) -> AssetProperties {
        AssetProperties {
            pointer: self.pointer.clone(),
            asset_id,
            data_subject: self.data_subject.clone(),
            version: self.version,
            filekey: self.filekey.clone(),
            acl: self.acl.clone(),
        }
    }
}

impl RequestPolicy for CreateAsset {
    const NAME: &'static str = "createAsset";

    fn build(
        &self,
        ctx: &WorkloadContext,
        tx_index: TxIndex,
    ) -> Result<TransactionRequest, RequestError> {
        let asset_id = self.asset_id(ctx.worker_index, ctx.clock.now_millis());
        trace!(worker = %ctx.worker_index, tx = tx_index.get(), %asset_id, "Generated asset id");

        TransactionRequest::builder(&self.contract_id, Self::FUNCTION)
            .transient_json(ASSET_PROPERTIES_KEY, &self.properties(asset_id))?
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workloads::test_support::context;

    fn decode(req: &TransactionRequest) -> AssetProperties {
        let bytes = req.transient(ASSET_PROPERTIES_KEY).unwrap();
        AssetProperties::from_json_bytes(bytes).unwrap()
    }

    #[test]
    fn test_create_asset_request() {
        let (ctx, _) = context(2, 1_700_000_000_123);
        let req = CreateAsset::new(&WorkloadConfig::default())
            .build(&ctx, TxIndex::FIRST)
            .unwrap();

        assert_eq!(req.contract_id, "medcare");
        assert_eq!(req.contract_function, "CreateAsset");
        assert!(req.contract_arguments.is_empty());

        let props = decode(&req);
        assert_eq!(props.asset_id, "caliper_test2_1700000000123");
        assert_eq!(props.pointer, "QmfYmWF2auuPVmCTpEycsyMv4wHnTDGBG4nigDmy3YpgoQ");
        assert_eq!(props.data_subject, "schen2");
        assert_eq!(props.version, 1);
        assert_eq!(props.filekey, "abc123");
        assert_eq!(props.acl, vec!["Org1MSP", "Org2MSP", "Org3MSP"]);
    }

    #[test]
    fn test_payload_has_exactly_contract_keys() {
        let (ctx, _) = context(0, 42);
        let req = CreateAsset::new(&WorkloadConfig::default())
            .build(&ctx, TxIndex::FIRST)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_slice(req.transient(ASSET_PROPERTIES_KEY).unwrap()).unwrap();
        let mut actual: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        let mut expected = vec!["pointer", "assetID", "dataSubject", "version", "filekey", "acl"];
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
        assert_eq!(value["version"], serde_json::json!(1));
    }

    #[test]
    fn test_asset_id_tracks_clock_not_tx_index() {
        let (ctx, clock) = context(5, 1_000);
        let workload = CreateAsset::new(&WorkloadConfig::default());

        let a = decode(&workload.build(&ctx, TxIndex(0)).unwrap());
        let b = decode(&workload.build(&ctx, TxIndex(1)).unwrap());
        // Same millisecond, same id.
        assert_eq!(a.asset_id, b.asset_id);

        clock.advance(1);
        let c = decode(&workload.build(&ctx, TxIndex(2)).unwrap());
        assert_eq!(c.asset_id, "caliper_test5_1001");
        assert_ne!(a.asset_id, c.asset_id);
    }
}
