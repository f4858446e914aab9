//! Transaction request handed to a submission adapter.

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use std::collections::BTreeMap;
use thiserror::Error;

/// Out-of-band data carried next to the argument list.
///
/// Values are opaque bytes; their structure is agreed with the contract.
/// Serialized, each value is a lowercase hex string, so a printed request
/// shows the payload but is not in the harness's own request format, which
/// carries raw strings or buffers. Hex-decode the values before replaying one.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransientMap(#[serde_as(as = "BTreeMap<_, Hex>")] BTreeMap<String, Vec<u8>>);

impl TransientMap {
    /// Create an empty transient map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one for this key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Errors while building a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// A required field was empty.
    #[error("Request field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// A transient payload could not be encoded.
    #[error("Failed to encode transient payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// One contract invocation.
///
/// Built fresh for every submission and moved into the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Target contract.
    pub contract_id: String,

    /// Function to invoke.
    pub contract_function: String,

    /// Positional arguments, in the order the function expects them.
    #[serde(default)]
    pub contract_arguments: Vec<String>,

    /// Data that bypasses ledger replication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transient_map: Option<TransientMap>,

    /// Evaluate without ordering a ledger update.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
}

impl TransactionRequest {
    /// Start building a request for `contract_id`.`contract_function`.
    pub fn builder(
        contract_id: impl Into<String>,
        contract_function: impl Into<String>,
    ) -> TransactionRequestBuilder {
        TransactionRequestBuilder {
            contract_id: contract_id.into(),
            contract_function: contract_function.into(),
            contract_arguments: Vec::new(),
            transient_map: None,
            read_only: false,
        }
    }

    /// Fetch a transient value by key.
    pub fn transient(&self, key: &str) -> Option<&[u8]> {
        self.transient_map.as_ref().and_then(|m| m.get(key))
    }
}

/// Builder for [`TransactionRequest`].
#[derive(Debug, Clone)]
pub struct TransactionRequestBuilder {
    contract_id: String,
    contract_function: String,
    contract_arguments: Vec<String>,
    transient_map: Option<TransientMap>,
    read_only: bool,
}

impl TransactionRequestBuilder {
    /// Append one positional argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.contract_arguments.push(arg.into());
        self
    }

    /// Append several positional arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contract_arguments
            .extend(args.into_iter().map(Into::into));
        self
    }

    /// Add a transient entry.
    pub fn transient(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.transient_map
            .get_or_insert_with(TransientMap::new)
            .insert(key, value);
        self
    }

    /// Serialize `value` as JSON into a transient entry.
    pub fn transient_json<T: Serialize>(
        self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, RequestError> {
        let bytes = serde_json::to_vec(value)?;
        Ok(self.transient(key, bytes))
    }

    /// Mark the request as evaluate-only.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Finish the request.
    pub fn build(self) -> Result<TransactionRequest, RequestError> {
        if self.contract_id.is_empty() {
            return Err(RequestError::EmptyField("contract_id"));
        }
        if self.contract_function.is_empty() {
            return Err(RequestError::EmptyField("contract_function"));
        }

        Ok(TransactionRequest {
            contract_id: self.contract_id,
            contract_function: self.contract_function,
            contract_arguments: self.contract_arguments,
            transient_map: self.transient_map,
            read_only: self.read_only,
        })
    }
}
