use pkgdesk_core::{LatestCandidate, PackageRow};
use semver::Version;
use serde::Serialize;

use crate::requests::Stability;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpgradeAllAvailability {
    pub upgradable_to_latest: bool,
    pub upgradable_to_stable: bool,
}

impl UpgradeAllAvailability {
    // "upgrade all stable" is only distinct when some upgrade would land on
    // a prerelease
    pub fn from_rows(rows: &[PackageRow]) -> Self {
        let mut upgradable_to_latest = false;
        let mut upgrading_to_prerelease = false;
        let mut stable_upgradable = false;

        for row in rows {
            match &row.latest {
                LatestCandidate::None | LatestCandidate::Contains { .. } => {}
                LatestCandidate::Upgradable { pkg, .. } => {
                    upgradable_to_latest = true;
                    upgrading_to_prerelease |= !pkg.is_stable();
                }
            }
            stable_upgradable |= row.stable_latest.is_upgradable();
        }

        Self {
            upgradable_to_latest,
            upgradable_to_stable: stable_upgradable && upgrading_to_prerelease,
        }
    }

    pub fn permits(&self, stability: Stability) -> bool {
        match stability {
            Stability::Latest => self.upgradable_to_latest,
            Stability::Stable => self.upgradable_to_stable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SourceSummary {
    None,
    NotSelected,
    Single(String),
    Multiple(Vec<String>),
}

impl SourceSummary {
    pub fn for_row(row: &PackageRow) -> Self {
        let mut sources = row.sources.iter().cloned();
        match row.sources.len() {
            0 if row.is_there_source => Self::NotSelected,
            0 => Self::None,
            1 => sources.next().map(Self::Single).unwrap_or(Self::None),
            _ => Self::Multiple(sources.collect()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::NotSelected => "source not selected".to_string(),
            Self::Single(source) => source.clone(),
            Self::Multiple(sources) => sources.join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstalledSummary {
    NotInstalled,
    Installed { version: Version, yanked: bool },
}

impl InstalledSummary {
    pub fn for_row(row: &PackageRow) -> Self {
        match &row.installed {
            Some(installed) => Self::Installed {
                version: installed.version.clone(),
                yanked: installed.yanked,
            },
            None => Self::NotInstalled,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::NotInstalled => "none".to_string(),
            Self::Installed {
                version,
                yanked: true,
            } => format!("{version} (yanked)"),
            Self::Installed {
                version,
                yanked: false,
            } => version.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionChoices {
    pub compatible: Vec<String>,
    pub incompatible: Vec<String>,
    pub selected: String,
}

impl VersionChoices {
    pub fn for_row(row: &PackageRow) -> Self {
        Self {
            compatible: row.unity_compatible.keys(),
            incompatible: row.unity_incompatible.keys(),
            selected: row.installed_version_string().unwrap_or_default(),
        }
    }

    pub fn latest_compatible(&self) -> Option<&str> {
        self.compatible.first().map(String::as_str)
    }
}

// the add button needs at least one version that works with the project's unity
pub fn can_install_latest(row: &PackageRow) -> bool {
    !row.is_installed() && !row.unity_compatible.is_empty() && !row.latest.is_none()
}
