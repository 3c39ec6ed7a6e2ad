mod latest;
mod package;
mod repositories;
mod row;
mod snapshot;

pub use latest::LatestCandidate;
pub use package::{InstalledPackage, Package, PackageId, PackageSource};
pub use repositories::{
    RepositoriesInfo, UserRepository, CURATED_REPOSITORY_ID, OFFICIAL_REPOSITORY_ID,
};
pub use row::{PackageRow, VersionCandidates};
pub use snapshot::CatalogSnapshot;
