use pkgdesk_core::PackageRow;
use serde::Serialize;

use crate::capability::{evaluate, PackageCapability};
use crate::requests::Stability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", content = "stability", rename_all = "snake_case")]
pub enum BulkAction {
    InstallOrUpgrade(Stability),
    Reinstall,
    Remove,
}

impl BulkAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InstallOrUpgrade(Stability::Latest) => "install selected latest",
            Self::InstallOrUpgrade(Stability::Stable) => "install selected stable latest",
            Self::Reinstall => "reinstall selected",
            Self::Remove => "uninstall selected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BulkAggregateCapability {
    pub can_install_or_upgrade: bool,
    pub can_reinstall_or_remove: bool,
    pub can_install_or_upgrade_stable: bool,
    pub has_selection: bool,
}

impl Default for BulkAggregateCapability {
    fn default() -> Self {
        aggregate(std::iter::empty::<PackageCapability>())
    }
}

impl BulkAggregateCapability {
    pub fn permits(&self, action: BulkAction) -> bool {
        if !self.has_selection {
            return false;
        }
        match action {
            BulkAction::InstallOrUpgrade(Stability::Latest) => self.can_install_or_upgrade,
            BulkAction::InstallOrUpgrade(Stability::Stable) => self.can_install_or_upgrade_stable,
            BulkAction::Reinstall | BulkAction::Remove => self.can_reinstall_or_remove,
        }
    }

    pub fn available_actions(&self) -> Vec<BulkAction> {
        [
            BulkAction::InstallOrUpgrade(Stability::Latest),
            BulkAction::InstallOrUpgrade(Stability::Stable),
            BulkAction::Reinstall,
            BulkAction::Remove,
        ]
        .into_iter()
        .filter(|action| self.permits(*action))
        .collect()
    }
}

/// Folds per-row capabilities into the single mode a bulk action may use.
///
/// Every flag starts out `true`, so an empty input yields the identity of
/// the fold; `has_selection` is what keeps an empty selection from offering
/// anything. When every selected row's unrestricted latest is already
/// stable, the stable action would duplicate the plain one and is
/// suppressed.
pub fn aggregate<I>(capabilities: I) -> BulkAggregateCapability
where
    I: IntoIterator<Item = PackageCapability>,
{
    let mut can_install_or_upgrade = true;
    let mut can_reinstall_or_remove = true;
    let mut can_install_or_upgrade_stable = true;
    let mut all_latest_is_stable = true;
    let mut has_selection = false;

    for capability in capabilities {
        has_selection = true;
        can_install_or_upgrade &= capability.can_install_or_upgrade;
        can_reinstall_or_remove &= capability.can_reinstall_or_remove;
        can_install_or_upgrade_stable &= capability.can_install_or_upgrade_stable;
        all_latest_is_stable &= capability.latest_is_stable;
    }

    BulkAggregateCapability {
        can_install_or_upgrade,
        can_reinstall_or_remove,
        // the desktop client reports stable as false for an empty fold; here
        // the empty fold stays the identity and `permits` gates on has_selection
        can_install_or_upgrade_stable: can_install_or_upgrade_stable
            && !(has_selection && all_latest_is_stable),
        has_selection,
    }
}

pub fn aggregate_rows<'a, I>(rows: I) -> BulkAggregateCapability
where
    I: IntoIterator<Item = &'a PackageRow>,
{
    aggregate(rows.into_iter().map(evaluate))
}

/// Whether a row may join a selection currently in `aggregate` mode.
pub fn is_eligible(aggregate: &BulkAggregateCapability, row: &PackageCapability) -> bool {
    (aggregate.can_install_or_upgrade && row.can_install_or_upgrade)
        || (aggregate.can_reinstall_or_remove && row.can_reinstall_or_remove)
        || (aggregate.can_install_or_upgrade_stable && row.can_install_or_upgrade_stable)
}
