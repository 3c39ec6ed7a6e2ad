mod bulk;
mod capability;
mod error;
mod filter;
mod requests;
mod selection;
mod summary;

pub use bulk::{aggregate, aggregate_rows, is_eligible, BulkAction, BulkAggregateCapability};
pub use capability::{evaluate, PackageCapability};
pub use error::PlanError;
pub use filter::{filter, FilterIndex};
pub use requests::{ChangeRequest, RequestBuilder, Stability};
pub use selection::{SelectedPackage, SelectionSetController, SelectionState};
pub use summary::{
    can_install_latest, InstalledSummary, SourceSummary, UpgradeAllAvailability, VersionChoices,
};

#[cfg(test)]
mod tests;
