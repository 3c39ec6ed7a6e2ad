use std::collections::HashSet;
use std::fmt;

use pkgdesk_core::{LatestCandidate, Package, PackageId, PackageRow};
use serde::Serialize;

use crate::error::PlanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Latest,
    Stable,
}

impl Stability {
    pub fn from_stable_flag(stable: bool) -> Self {
        if stable {
            Self::Stable
        } else {
            Self::Latest
        }
    }

    pub fn candidate<'a>(&self, row: &'a PackageRow) -> &'a LatestCandidate {
        match self {
            Self::Latest => &row.latest,
            Self::Stable => &row.stable_latest,
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Stable => f.write_str("stable latest"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChangeRequest {
    #[serde(rename_all = "camelCase")]
    Install {
        project_path: String,
        pkg: Package,
        has_unity_incompatible_latest: Option<bool>,
    },
    #[serde(rename_all = "camelCase")]
    UpgradeAll {
        project_path: String,
        packages: Vec<Package>,
        has_unity_incompatible_latest: bool,
    },
    #[serde(rename_all = "camelCase")]
    BulkInstall {
        project_path: String,
        packages: Vec<Package>,
        has_unity_incompatible_latest: bool,
    },
    #[serde(rename_all = "camelCase")]
    BulkReinstall {
        project_path: String,
        package_ids: Vec<PackageId>,
    },
    #[serde(rename_all = "camelCase")]
    BulkRemove {
        project_path: String,
        package_ids: Vec<PackageId>,
    },
    #[serde(rename_all = "camelCase")]
    Remove {
        project_path: String,
        package_id: PackageId,
        display_name: String,
    },
    #[serde(rename_all = "camelCase")]
    ReinstallAll { project_path: String },
}

impl ChangeRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Install { .. } => "install",
            Self::UpgradeAll { .. } => "upgrade-all",
            Self::BulkInstall { .. } => "bulk-install",
            Self::BulkReinstall { .. } => "bulk-reinstall",
            Self::BulkRemove { .. } => "bulk-remove",
            Self::Remove { .. } => "remove",
            Self::ReinstallAll { .. } => "reinstall-all",
        }
    }

    pub fn project_path(&self) -> &str {
        match self {
            Self::Install { project_path, .. }
            | Self::UpgradeAll { project_path, .. }
            | Self::BulkInstall { project_path, .. }
            | Self::BulkReinstall { project_path, .. }
            | Self::BulkRemove { project_path, .. }
            | Self::Remove { project_path, .. }
            | Self::ReinstallAll { project_path } => project_path,
        }
    }

    pub fn package_count(&self) -> usize {
        match self {
            Self::Install { .. } | Self::Remove { .. } => 1,
            Self::UpgradeAll { packages, .. } | Self::BulkInstall { packages, .. } => {
                packages.len()
            }
            Self::BulkReinstall { package_ids, .. } | Self::BulkRemove { package_ids, .. } => {
                package_ids.len()
            }
            Self::ReinstallAll { .. } => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    project_path: String,
}

impl RequestBuilder {
    pub fn new(project_path: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
        }
    }

    pub fn project_path(&self) -> &str {
        &self.project_path
    }

    pub fn install(
        &self,
        pkg: &Package,
        has_unity_incompatible_latest: Option<bool>,
    ) -> ChangeRequest {
        ChangeRequest::Install {
            project_path: self.project_path.clone(),
            pkg: pkg.clone(),
            has_unity_incompatible_latest,
        }
    }

    // an installed row only moves when its latest is newer
    pub fn install_latest(&self, row: &PackageRow) -> Option<ChangeRequest> {
        let (pkg, has_unity_incompatible_latest) = match &row.latest {
            LatestCandidate::None => return None,
            LatestCandidate::Contains { .. } if row.is_installed() => return None,
            LatestCandidate::Contains { pkg } => (pkg, false),
            LatestCandidate::Upgradable {
                pkg,
                has_unity_incompatible_latest,
            } => (pkg, *has_unity_incompatible_latest),
        };
        Some(self.install(pkg, Some(has_unity_incompatible_latest)))
    }

    // picking the installed version again is not a change
    pub fn install_version(&self, row: &PackageRow, version: &str) -> Option<ChangeRequest> {
        if row.installed_version_string().as_deref() == Some(version) {
            return None;
        }
        let pkg = row
            .unity_compatible
            .get(version)
            .or_else(|| row.unity_incompatible.get(version))?;
        Some(self.install(pkg, None))
    }

    pub fn upgrade_all(&self, rows: &[PackageRow], stability: Stability) -> ChangeRequest {
        let mut packages = Vec::new();
        let mut has_unity_incompatible_latest = false;
        for row in rows {
            match stability.candidate(row) {
                LatestCandidate::None | LatestCandidate::Contains { .. } => {}
                LatestCandidate::Upgradable {
                    pkg,
                    has_unity_incompatible_latest: incompatible,
                } => {
                    packages.push(pkg.clone());
                    has_unity_incompatible_latest |= *incompatible;
                }
            }
        }

        ChangeRequest::UpgradeAll {
            project_path: self.project_path.clone(),
            packages,
            has_unity_incompatible_latest,
        }
    }

    pub fn bulk_install_or_upgrade(
        &self,
        selection: &[PackageId],
        rows: &[PackageRow],
        stability: Stability,
    ) -> Result<ChangeRequest, PlanError> {
        let selected: HashSet<&str> = selection.iter().map(PackageId::as_str).collect();
        let mut found: HashSet<&str> = HashSet::new();
        let mut packages = Vec::new();
        let mut has_unity_incompatible_latest = false;

        for row in rows {
            if !selected.contains(row.id.as_str()) {
                continue;
            }
            found.insert(row.id.as_str());
            match stability.candidate(row) {
                LatestCandidate::None => {
                    return Err(PlanError::InvalidSelection {
                        package_id: row.id.clone(),
                        stability,
                        reason: "no candidate version is available".to_string(),
                    });
                }
                LatestCandidate::Contains { pkg } => packages.push(pkg.clone()),
                LatestCandidate::Upgradable {
                    pkg,
                    has_unity_incompatible_latest: incompatible,
                } => {
                    packages.push(pkg.clone());
                    has_unity_incompatible_latest |= *incompatible;
                }
            }
        }

        if let Some(missing) = selection
            .iter()
            .find(|id| !found.contains(id.as_str()))
        {
            return Err(PlanError::InvalidSelection {
                package_id: missing.clone(),
                stability,
                reason: "package is no longer listed".to_string(),
            });
        }

        Ok(ChangeRequest::BulkInstall {
            project_path: self.project_path.clone(),
            packages,
            has_unity_incompatible_latest,
        })
    }

    pub fn bulk_reinstall(&self, selection: &[PackageId]) -> ChangeRequest {
        ChangeRequest::BulkReinstall {
            project_path: self.project_path.clone(),
            package_ids: selection.to_vec(),
        }
    }

    pub fn bulk_remove(&self, selection: &[PackageId]) -> ChangeRequest {
        ChangeRequest::BulkRemove {
            project_path: self.project_path.clone(),
            package_ids: selection.to_vec(),
        }
    }

    pub fn remove(&self, row: &PackageRow) -> ChangeRequest {
        ChangeRequest::Remove {
            project_path: self.project_path.clone(),
            package_id: row.id.clone(),
            display_name: row.display_name.clone(),
        }
    }

    pub fn reinstall_all(&self) -> ChangeRequest {
        ChangeRequest::ReinstallAll {
            project_path: self.project_path.clone(),
        }
    }
}
