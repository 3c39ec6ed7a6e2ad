use pkgdesk_core::{LatestCandidate, PackageRow};
use serde::Serialize;

// install and upgrade share one action, as do reinstall and remove
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PackageCapability {
    pub can_install_or_upgrade: bool,
    pub can_reinstall_or_remove: bool,
    pub can_install_or_upgrade_stable: bool,
    pub latest_is_stable: bool,
}

impl PackageCapability {
    pub fn has_any_update(&self) -> bool {
        self.can_install_or_upgrade
            || self.can_reinstall_or_remove
            || self.can_install_or_upgrade_stable
    }
}

pub fn evaluate(row: &PackageRow) -> PackageCapability {
    let installed = row.is_installed();
    PackageCapability {
        can_install_or_upgrade: can_take_candidate(installed, &row.latest),
        can_reinstall_or_remove: installed,
        can_install_or_upgrade_stable: can_take_candidate(installed, &row.stable_latest),
        latest_is_stable: row
            .latest
            .package()
            .map(|pkg| pkg.is_stable())
            .unwrap_or(false),
    }
}

// an installed package may already be at or past the candidate, so only an
// upgradable candidate counts there
fn can_take_candidate(installed: bool, candidate: &LatestCandidate) -> bool {
    match candidate {
        LatestCandidate::None => false,
        LatestCandidate::Contains { .. } => !installed,
        LatestCandidate::Upgradable { .. } => true,
    }
}
