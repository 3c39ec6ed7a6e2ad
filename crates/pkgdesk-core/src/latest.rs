use serde::{Deserialize, Serialize};

use crate::package::Package;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LatestCandidate {
    #[default]
    None,
    // available latest is not newer than the installed version
    Contains {
        pkg: Package,
    },
    Upgradable {
        pkg: Package,
        #[serde(default)]
        has_unity_incompatible_latest: bool,
    },
}

impl LatestCandidate {
    pub fn package(&self) -> Option<&Package> {
        match self {
            Self::None => None,
            Self::Contains { pkg } => Some(pkg),
            Self::Upgradable { pkg, .. } => Some(pkg),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_upgradable(&self) -> bool {
        matches!(self, Self::Upgradable { .. })
    }

    pub fn has_unity_incompatible_latest(&self) -> bool {
        match self {
            Self::None => false,
            Self::Contains { .. } => false,
            Self::Upgradable {
                has_unity_incompatible_latest,
                ..
            } => *has_unity_incompatible_latest,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Contains { .. } => "contains",
            Self::Upgradable { .. } => "upgradable",
        }
    }
}
