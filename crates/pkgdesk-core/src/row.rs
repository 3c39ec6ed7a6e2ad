use std::collections::{BTreeSet, HashSet};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::latest::LatestCandidate;
use crate::package::{InstalledPackage, Package, PackageId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCandidates(Vec<Package>);

impl VersionCandidates {
    pub fn new(packages: Vec<Package>) -> Self {
        Self(packages)
    }

    pub fn get(&self, version: &str) -> Option<&Package> {
        self.0.iter().find(|pkg| pkg.version_string() == version)
    }

    pub fn contains_key(&self, version: &str) -> bool {
        self.get(version).is_some()
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.iter().map(Package::version_string).collect()
    }

    pub fn first(&self) -> Option<&Package> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Package> for VersionCandidates {
    fn from_iter<T: IntoIterator<Item = Package>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRow {
    pub id: PackageId,
    pub display_name: String,
    #[serde(default)]
    pub aliases: BTreeSet<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sources: BTreeSet<String>,
    #[serde(default)]
    pub is_there_source: bool,
    pub installed: Option<InstalledPackage>,
    #[serde(default)]
    pub latest: LatestCandidate,
    #[serde(default)]
    pub stable_latest: LatestCandidate,
    #[serde(default)]
    pub unity_compatible: VersionCandidates,
    #[serde(default)]
    pub unity_incompatible: VersionCandidates,
}

impl PackageRow {
    pub fn new(id: impl Into<PackageId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            aliases: BTreeSet::new(),
            description: String::new(),
            sources: BTreeSet::new(),
            is_there_source: false,
            installed: None,
            latest: LatestCandidate::None,
            stable_latest: LatestCandidate::None,
            unity_compatible: VersionCandidates::default(),
            unity_incompatible: VersionCandidates::default(),
        }
    }

    pub fn is_installed(&self) -> bool {
        self.installed.is_some()
    }

    pub fn installed_version_string(&self) -> Option<String> {
        self.installed
            .as_ref()
            .map(|installed| installed.version.to_string())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(anyhow!("package row id must not be empty"));
        }

        let compatible: HashSet<String> = self.unity_compatible.keys().into_iter().collect();
        let mut seen = HashSet::new();
        for version in self.unity_incompatible.keys() {
            if compatible.contains(&version) {
                return Err(anyhow!(
                    "version '{version}' of '{}' is listed as both unity compatible and incompatible",
                    self.id
                ));
            }
            if !seen.insert(version.clone()) {
                return Err(anyhow!(
                    "duplicate unity incompatible version '{version}' for '{}'",
                    self.id
                ));
            }
        }
        if compatible.len() != self.unity_compatible.len() {
            return Err(anyhow!(
                "duplicate unity compatible version for '{}'",
                self.id
            ));
        }

        Ok(())
    }
}
