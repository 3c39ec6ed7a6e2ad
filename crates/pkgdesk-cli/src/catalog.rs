use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use pkgdesk_core::{CatalogSnapshot, PackageRow, RepositoriesInfo};
use pkgdesk_planner::ChangeRequest;
use pkgdesk_session::{CommandBackend, TransportError};
use tracing::debug;

pub(crate) fn load_catalog(path: &Path) -> Result<CatalogSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog: {}", path.display()))?;
    CatalogSnapshot::from_toml_str(&raw)
        .with_context(|| format!("failed to load catalog: {}", path.display()))
}

// Serves a catalog snapshot in place of a live backend. Change requests are
// never applied, so every command is a dry run.
pub(crate) struct SnapshotBackend {
    project_path: String,
    rows: Vec<PackageRow>,
    repositories: Mutex<RepositoriesInfo>,
}

impl SnapshotBackend {
    pub(crate) fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            project_path: snapshot.project_path,
            rows: snapshot.rows,
            repositories: Mutex::new(snapshot.repositories),
        }
    }

    pub(crate) fn project_path(&self) -> &str {
        &self.project_path
    }
}

#[async_trait]
impl CommandBackend for SnapshotBackend {
    async fn repositories_info(&self) -> Result<RepositoriesInfo, TransportError> {
        Ok(self.repositories.lock().clone())
    }

    async fn package_rows(&self, project_path: &str) -> Result<Vec<PackageRow>, TransportError> {
        if project_path != self.project_path {
            return Err(TransportError::new(
                "package_rows",
                format!("catalog does not describe project '{project_path}'"),
            ));
        }
        Ok(self.rows.clone())
    }

    async fn set_show_prerelease_packages(&self, shown: bool) -> Result<(), TransportError> {
        self.repositories.lock().show_prerelease_packages = shown;
        Ok(())
    }

    async fn show_repository(&self, id: &str) -> Result<(), TransportError> {
        self.repositories.lock().set_repository_shown(id, true);
        Ok(())
    }

    async fn hide_repository(&self, id: &str) -> Result<(), TransportError> {
        self.repositories.lock().set_repository_shown(id, false);
        Ok(())
    }

    async fn set_hide_local_user_packages(&self, hidden: bool) -> Result<(), TransportError> {
        self.repositories.lock().hide_local_user_packages = hidden;
        Ok(())
    }

    async fn apply(&self, request: &ChangeRequest) -> Result<(), TransportError> {
        debug!(
            kind = request.kind(),
            packages = request.package_count(),
            "dry run, change request not applied"
        );
        Ok(())
    }
}
