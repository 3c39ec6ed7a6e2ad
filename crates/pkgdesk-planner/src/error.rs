use pkgdesk_core::PackageId;
use thiserror::Error;

use crate::bulk::BulkAction;
use crate::requests::Stability;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("package '{package_id}' is not installable as {stability}: {reason}")]
    InvalidSelection {
        package_id: PackageId,
        stability: Stability,
        reason: String,
    },
    #[error("'{}' is not available for the current selection", action.as_str())]
    UnavailableBulkAction { action: BulkAction },
    #[error("upgrade all to {stability} is not available: no package would change")]
    UnavailableUpgradeAll { stability: Stability },
}

impl PlanError {
    pub fn package_id(&self) -> Option<&PackageId> {
        match self {
            Self::InvalidSelection { package_id, .. } => Some(package_id),
            Self::UnavailableBulkAction { .. } | Self::UnavailableUpgradeAll { .. } => None,
        }
    }
}
