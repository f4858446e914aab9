//! Workload variants.
//!
//! Each variant is a [`RequestPolicy`](crate::RequestPolicy) wrapped in a
//! [`Workload`](crate::Workload). Only `CreateAsset` varies its request
//! between calls; the others send the same literals every time.

mod access;
mod create_asset;
mod get_history;
mod query_asset;
mod read_asset;
mod update_acl;

pub use access::{EraseDataRequest, ReadAcl, RequestPermission, RevokeAcl};
pub use create_asset::CreateAsset;
pub use get_history::GetHistory;
pub use query_asset::QueryAsset;
pub use read_asset::ReadAsset;
pub use update_acl::UpdateAcl;
