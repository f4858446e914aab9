//! Asset payload carried in transient data by `CreateAsset`.

use serde::{Deserialize, Serialize};

/// Transient key the contract reads asset properties from.
pub const ASSET_PROPERTIES_KEY: &str = "asset_properties";

/// Properties of a new asset.
///
/// Field order and names match the JSON object the contract parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetProperties {
    /// Content pointer (an IPFS CID) to the off-chain record.
    pub pointer: String,

    #[serde(rename = "assetID")]
    pub asset_id: String,

    /// Patient the record belongs to.
    #[serde(rename = "dataSubject")]
    pub data_subject: String,

    pub version: u32,

    /// Reference to the record's encryption key.
    pub filekey: String,

    /// Organizations (MSP ids) allowed to access the asset, in order.
    pub acl: Vec<String>,
}

impl AssetProperties {
    /// Encode as the JSON bytes sent in the transient map.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decode from transient bytes.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AssetProperties {
        AssetProperties {
            pointer: "QmPointer".into(),
            asset_id: "caliper_test0_1".into(),
            data_subject: "schen2".into(),
            version: 1,
            filekey: "abc123".into(),
            acl: vec!["Org1MSP".into(), "Org2MSP".into()],
        }
    }

    #[test]
    fn test_json_keys_in_contract_order() {
        let json = String::from_utf8(sample().to_json_bytes().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"pointer":"QmPointer","assetID":"caliper_test0_1","dataSubject":"schen2","version":1,"filekey":"abc123","acl":["Org1MSP","Org2MSP"]}"#
        );
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let bytes = br#"{"pointer":"p","assetID":"a","dataSubject":"d","version":1,"filekey":"f","acl":[],"owner":"x"}"#;
        assert!(AssetProperties::from_json_bytes(bytes).is_err());
    }
}
