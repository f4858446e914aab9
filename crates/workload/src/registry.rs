//! Workload lookup by name.
//!
//! The harness refers to workloads by the names of their module files
//! (`createAsset`, `readAsset`, ...). [`WorkloadKind`] maps those names to
//! variants and builds boxed [`WorkloadModule`]s.

use crate::config::WorkloadConfig;
use crate::error::WorkloadError;
use crate::module::{RequestPolicy, Workload, WorkloadContext, WorkloadModule};
use crate::workloads::{
    CreateAsset, EraseDataRequest, GetHistory, QueryAsset, ReadAcl, ReadAsset, RequestPermission,
    RevokeAcl, UpdateAcl,
};
use std::fmt;
use std::str::FromStr;

/// Every registered workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    CreateAsset,
    GetHistory,
    QueryAsset,
    ReadAsset,
    UpdateAcl,
    ReadAcl,
    RevokeAcl,
    RequestPermission,
    EraseDataRequest,
}

impl WorkloadKind {
    /// All workloads, in listing order.
    pub const ALL: [WorkloadKind; 9] = [
        WorkloadKind::CreateAsset,
        WorkloadKind::GetHistory,
        WorkloadKind::QueryAsset,
        WorkloadKind::ReadAsset,
        WorkloadKind::UpdateAcl,
        WorkloadKind::ReadAcl,
        WorkloadKind::RevokeAcl,
        WorkloadKind::RequestPermission,
        WorkloadKind::EraseDataRequest,
    ];

    /// Factory name.
    pub fn name(self) -> &'static str {
        match self {
            WorkloadKind::CreateAsset => CreateAsset::NAME,
            WorkloadKind::GetHistory => GetHistory::NAME,
            WorkloadKind::QueryAsset => QueryAsset::NAME,
            WorkloadKind::ReadAsset => ReadAsset::NAME,
            WorkloadKind::UpdateAcl => UpdateAcl::NAME,
            WorkloadKind::ReadAcl => ReadAcl::NAME,
            WorkloadKind::RevokeAcl => RevokeAcl::NAME,
            WorkloadKind::RequestPermission => RequestPermission::NAME,
            WorkloadKind::EraseDataRequest => EraseDataRequest::NAME,
        }
    }

    /// Contract function the workload invokes.
    pub fn function(self) -> &'static str {
        match self {
            WorkloadKind::CreateAsset => CreateAsset::FUNCTION,
            WorkloadKind::GetHistory => GetHistory::FUNCTION,
            WorkloadKind::QueryAsset => QueryAsset::FUNCTION,
            WorkloadKind::ReadAsset => ReadAsset::FUNCTION,
            WorkloadKind::UpdateAcl => UpdateAcl::FUNCTION,
            WorkloadKind::ReadAcl => ReadAcl::FUNCTION,
            WorkloadKind::RevokeAcl => RevokeAcl::FUNCTION,
            WorkloadKind::RequestPermission => RequestPermission::FUNCTION,
            WorkloadKind::EraseDataRequest => EraseDataRequest::FUNCTION,
        }
    }

    /// Build a module instance for one worker.
    pub fn create(self, ctx: WorkloadContext, config: &WorkloadConfig) -> Box<dyn WorkloadModule> {
        match self {
            WorkloadKind::CreateAsset => Box::new(Workload::new(ctx, CreateAsset::new(config))),
            WorkloadKind::GetHistory => Box::new(Workload::new(ctx, GetHistory::new(config))),
            WorkloadKind::QueryAsset => Box::new(Workload::new(ctx, QueryAsset::new(config))),
            WorkloadKind::ReadAsset => Box::new(Workload::new(ctx, ReadAsset::new(config))),
            WorkloadKind::UpdateAcl => Box::new(Workload::new(ctx, UpdateAcl::new(config))),
            WorkloadKind::ReadAcl => Box::new(Workload::new(ctx, ReadAcl::new(config))),
            WorkloadKind::RevokeAcl => Box::new(Workload::new(ctx, RevokeAcl::new(config))),
            WorkloadKind::RequestPermission => {
                Box::new(Workload::new(ctx, RequestPermission::new(config)))
            }
            WorkloadKind::EraseDataRequest => {
                Box::new(Workload::new(ctx, EraseDataRequest::new(config)))
            }
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkloadKind {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept module file names too, e.g. "readAsset.js".
        let name = s.strip_suffix(".js").unwrap_or(s);
        WorkloadKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| WorkloadError::UnknownWorkload(s.to_string()))
    }
}

/// Create the workload registered under `name`.
pub fn create_workload_module(
    name: &str,
    ctx: WorkloadContext,
    config: &WorkloadConfig,
) -> Result<Box<dyn WorkloadModule>, WorkloadError> {
    let kind: WorkloadKind = name.parse()?;
    Ok(kind.create(ctx, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workloads::test_support::context;
    use std::collections::HashSet;

    #[test]
    fn test_names_round_trip() {
        for kind in WorkloadKind::ALL {
            assert_eq!(kind.name().parse::<WorkloadKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_names_unique() {
        let names: HashSet<_> = WorkloadKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), WorkloadKind::ALL.len());
    }

    #[test]
    fn test_module_file_names_accepted() {
        assert_eq!(
            "updateACL.js".parse::<WorkloadKind>().unwrap(),
            WorkloadKind::UpdateAcl
        );
    }

    #[test]
    fn test_erase_data_request_registered() {
        let kind: WorkloadKind = "eraseDataRequest".parse().unwrap();
        assert_eq!(kind, WorkloadKind::EraseDataRequest);
        assert_eq!(kind.function(), "eraseDataRequest");
        assert!(WorkloadKind::ALL.contains(&kind));
    }

    #[test]
    fn test_unknown_name() {
        let (ctx, _) = context(0, 0);
        let err = create_workload_module("deleteAsset", ctx, &WorkloadConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, WorkloadError::UnknownWorkload(ref n) if n == "deleteAsset"));
    }

    #[test]
    fn test_created_module_matches_kind() {
        for kind in WorkloadKind::ALL {
            let (ctx, _) = context(1, 10);
            let module = kind.create(ctx, &WorkloadConfig::default());

            assert_eq!(module.name(), kind.name());
            let req = module.build_request().unwrap();
            assert_eq!(req.contract_function, kind.function());
            assert_eq!(req.contract_id, "medcare");
        }
    }
}
