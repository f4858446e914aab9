//! Configuration for workload modules.
//!
//! Every literal a workload sends lives here. The defaults are the values the
//! benchmark network is seeded with, so an empty config reproduces the
//! standard rounds.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while loading a workload config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Invalid workload config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Literals used to build requests.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkloadConfig {
    /// Contract every request targets.
    pub contract_id: String,

    /// Existing asset read, updated and queried for its ACL.
    pub asset_id: String,

    /// Existing asset whose history is fetched.
    pub history_asset_id: String,

    /// Patient queried by `QueryAssetByPatient`.
    pub patient: String,

    /// Prefix of generated asset ids.
    pub asset_id_prefix: String,

    /// Content pointer stored on created assets.
    pub pointer: String,

    /// Data subject stored on created assets.
    pub data_subject: String,

    /// Version stored on created assets.
    pub version: u32,

    /// File key stored on created assets.
    pub filekey: String,

    /// ACL stored on created assets, in order.
    pub acl: Vec<String>,

    /// Organization granted (or revoked) by the ACL workloads.
    pub target_org: String,

    /// Purpose sent with permission requests.
    pub purpose: String,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            contract_id: "medcare".to_string(),
            asset_id: "phi_mock0".to_string(),
            history_asset_id: "phi_mock0_read".to_string(),
            patient: "cbirm1".to_string(),
            asset_id_prefix: "caliper_test".to_string(),
            pointer: "QmfYmWF2auuPVmCTpEycsyMv4wHnTDGBG4nigDmy3YpgoQ".to_string(),
            data_subject: "schen2".to_string(),
            version: 1,
            filekey: "abc123".to_string(),
            acl: vec![
                "Org1MSP".to_string(),
                "Org2MSP".to_string(),
                "Org3MSP".to_string(),
            ],
            target_org: "Org3MSP".to_string(),
            purpose: "benchmark".to_string(),
        }
    }
}

impl WorkloadConfig {
    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Set the target contract.
    pub fn with_contract_id(mut self, contract_id: impl Into<String>) -> Self {
        self.contract_id = contract_id.into();
        self
    }

    /// Set the asset read and updated by the fixed workloads.
    pub fn with_asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.asset_id = asset_id.into();
        self
    }

    /// Set the asset whose history is fetched.
    pub fn with_history_asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.history_asset_id = asset_id.into();
        self
    }

    /// Set the prefix of generated asset ids.
    pub fn with_asset_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_id_prefix = prefix.into();
        self
    }

    /// Set the content pointer stored on created assets.
    pub fn with_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = pointer.into();
        self
    }

    /// Set the data subject stored on created assets.
    pub fn with_data_subject(mut self, data_subject: impl Into<String>) -> Self {
        self.data_subject = data_subject.into();
        self
    }

    /// Set the version stored on created assets.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Set the file key stored on created assets.
    pub fn with_filekey(mut self, filekey: impl Into<String>) -> Self {
        self.filekey = filekey.into();
        self
    }

    /// Set the purpose sent with permission requests.
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Set the patient queried by `QueryAssetByPatient`.
    pub fn with_patient(mut self, patient: impl Into<String>) -> Self {
        self.patient = patient.into();
        self
    }

    /// Set the ACL stored on created assets.
    pub fn with_acl<I, S>(mut self, acl: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acl = acl.into_iter().map(Into::into).collect();
        self
    }

    /// Set the organization the ACL workloads grant or revoke.
    pub fn with_target_org(mut self, org: impl Into<String>) -> Self {
        self.target_org = org.into();
        self
    }
}
