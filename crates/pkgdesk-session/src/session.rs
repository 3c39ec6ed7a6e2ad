use std::collections::BTreeSet;
use std::future::Future;

use parking_lot::Mutex;
use pkgdesk_core::{PackageId, PackageRow, RepositoriesInfo};
use pkgdesk_planner::{
    evaluate, is_eligible, BulkAction, BulkAggregateCapability, ChangeRequest, FilterIndex,
    PackageCapability, PlanError, RequestBuilder, SelectionSetController, Stability,
    UpgradeAllAvailability,
};
use tracing::{debug, info, warn};

use crate::backend::{CommandBackend, TransportError};
use crate::error::SessionError;
use crate::gate::LoadingGate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    InstallLatest { package_id: PackageId },
    InstallVersion { package_id: PackageId, version: String },
    Remove { package_id: PackageId },
    UpgradeAll(Stability),
    ReinstallAll,
    Bulk(BulkAction),
}

#[derive(Debug, Default)]
struct SessionState {
    rows: Vec<PackageRow>,
    selection: SelectionSetController,
    filter: FilterIndex,
    repositories: Option<RepositoriesInfo>,
}

pub struct ProjectSession<B> {
    backend: B,
    builder: RequestBuilder,
    gate: LoadingGate,
    state: Mutex<SessionState>,
}

impl<B: CommandBackend> ProjectSession<B> {
    pub fn new(backend: B, project_path: impl Into<String>) -> Self {
        Self {
            backend,
            builder: RequestBuilder::new(project_path),
            gate: LoadingGate::new(),
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn project_path(&self) -> &str {
        self.builder.project_path()
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    pub async fn refresh(&self) -> Result<(), SessionError> {
        let _guard = self.gate.try_acquire()?;
        self.fetch_rows().await
    }

    async fn fetch_rows(&self) -> Result<(), SessionError> {
        let rows = self.backend.package_rows(self.project_path()).await?;
        self.replace_rows(rows);
        Ok(())
    }

    pub fn replace_rows(&self, rows: Vec<PackageRow>) {
        let mut state = self.state.lock();
        debug!(count = rows.len(), "replacing package rows");
        state.selection.on_source_list_replaced();
        state.filter.refresh(&rows);
        state.rows = rows;
    }

    pub fn rows(&self) -> Vec<PackageRow> {
        self.state.lock().rows.clone()
    }

    pub fn capability(&self, id: &str) -> Option<PackageCapability> {
        let state = self.state.lock();
        state
            .rows
            .iter()
            .find(|row| row.id.as_str() == id)
            .map(evaluate)
    }

    pub fn bulk_mode(&self) -> BulkAggregateCapability {
        self.state.lock().selection.aggregate()
    }

    pub fn selection_ids(&self) -> Vec<PackageId> {
        self.state.lock().selection.ids()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.lock().selection.contains(id)
    }

    // whether the row's checkbox is enabled under the current bulk mode
    pub fn is_selectable(&self, id: &str) -> bool {
        let state = self.state.lock();
        let aggregate = state.selection.aggregate();
        state
            .rows
            .iter()
            .find(|row| row.id.as_str() == id)
            .map(|row| is_eligible(&aggregate, &evaluate(row)))
            .unwrap_or(false)
    }

    pub fn toggle_selection(&self, id: &str) -> Result<bool, SessionError> {
        if self.gate.is_loading() {
            return Err(SessionError::Busy);
        }

        let mut state = self.state.lock();
        let SessionState {
            rows, selection, ..
        } = &mut *state;
        let row = rows
            .iter()
            .find(|row| row.id.as_str() == id)
            .ok_or_else(|| SessionError::UnknownPackage(id.to_string()))?;

        if selection.contains(id) {
            return Ok(selection.remove(id));
        }
        if !is_eligible(&selection.aggregate(), &evaluate(row)) {
            debug!(package = id, "row is not eligible for the current bulk mode");
            return Ok(false);
        }
        Ok(selection.add(row))
    }

    pub fn clear_selection(&self) -> Result<(), SessionError> {
        if self.gate.is_loading() {
            return Err(SessionError::Busy);
        }
        self.state.lock().selection.clear();
        Ok(())
    }

    pub fn set_search(&self, query: &str) {
        let mut state = self.state.lock();
        let SessionState { rows, filter, .. } = &mut *state;
        filter.set_query(rows, query);
    }

    pub fn visible_ids(&self) -> BTreeSet<PackageId> {
        self.state.lock().filter.visible().clone()
    }

    pub fn upgrade_all_availability(&self) -> UpgradeAllAvailability {
        UpgradeAllAvailability::from_rows(&self.state.lock().rows)
    }

    pub fn build_request(
        &self,
        action: &UserAction,
    ) -> Result<Option<ChangeRequest>, SessionError> {
        let state = self.state.lock();
        let find_row = |id: &PackageId| {
            state
                .rows
                .iter()
                .find(|row| &row.id == id)
                .ok_or_else(|| SessionError::UnknownPackage(id.to_string()))
        };

        let request = match action {
            UserAction::InstallLatest { package_id } => {
                self.builder.install_latest(find_row(package_id)?)
            }
            UserAction::InstallVersion {
                package_id,
                version,
            } => self.builder.install_version(find_row(package_id)?, version),
            UserAction::Remove { package_id } => Some(self.builder.remove(find_row(package_id)?)),
            UserAction::UpgradeAll(stability) => {
                if !UpgradeAllAvailability::from_rows(&state.rows).permits(*stability) {
                    return Err(PlanError::UnavailableUpgradeAll {
                        stability: *stability,
                    }
                    .into());
                }
                Some(self.builder.upgrade_all(&state.rows, *stability))
            }
            UserAction::ReinstallAll => Some(self.builder.reinstall_all()),
            UserAction::Bulk(bulk) => {
                if !state.selection.aggregate().permits(*bulk) {
                    return Err(PlanError::UnavailableBulkAction { action: *bulk }.into());
                }
                let selection = state.selection.ids();
                Some(match bulk {
                    BulkAction::InstallOrUpgrade(stability) => {
                        self.builder
                            .bulk_install_or_upgrade(&selection, &state.rows, *stability)?
                    }
                    BulkAction::Reinstall => self.builder.bulk_reinstall(&selection),
                    BulkAction::Remove => self.builder.bulk_remove(&selection),
                })
            }
        };
        Ok(request)
    }

    /// Builds the request for `action` and sends it to the backend.
    ///
    /// Returns `Ok(None)` when the action resolves to no change. The package
    /// list is re-fetched after the backend call settles, whether or not it
    /// succeeded, which also resets the selection.
    pub async fn dispatch(
        &self,
        action: UserAction,
    ) -> Result<Option<ChangeRequest>, SessionError> {
        let _guard = self.gate.try_acquire()?;

        let request = match self.build_request(&action) {
            Ok(Some(request)) => request,
            Ok(None) => return Ok(None),
            Err(err) => {
                warn!(?action, error = %err, "refusing to build change request");
                return Err(err);
            }
        };

        info!(
            kind = request.kind(),
            packages = request.package_count(),
            project = self.project_path(),
            "applying change request"
        );
        let applied = self.backend.apply(&request).await;
        if let Err(err) = &applied {
            warn!(kind = request.kind(), error = %err, "change request failed");
        }

        if let Err(err) = self.fetch_rows().await {
            warn!(error = %err, "failed to re-fetch package rows");
        }

        applied?;
        Ok(Some(request))
    }

    pub fn repositories_info(&self) -> Option<RepositoriesInfo> {
        self.state.lock().repositories.clone()
    }

    pub async fn load_repositories_info(&self) -> Result<RepositoriesInfo, SessionError> {
        let info = self.backend.repositories_info().await?;
        self.state.lock().repositories = Some(info.clone());
        Ok(info)
    }

    pub async fn set_show_prerelease_packages(&self, shown: bool) -> Result<(), SessionError> {
        self.optimistic(
            |info| info.show_prerelease_packages = shown,
            self.backend.set_show_prerelease_packages(shown),
        )
        .await
    }

    pub async fn set_repository_shown(&self, id: &str, shown: bool) -> Result<(), SessionError> {
        let call = async {
            if shown {
                self.backend.show_repository(id).await
            } else {
                self.backend.hide_repository(id).await
            }
        };
        self.optimistic(|info| info.set_repository_shown(id, shown), call)
            .await
    }

    pub async fn set_hide_local_user_packages(&self, hidden: bool) -> Result<(), SessionError> {
        self.optimistic(
            |info| info.hide_local_user_packages = hidden,
            self.backend.set_hide_local_user_packages(hidden),
        )
        .await
    }

    // the cached settings change before the call and are restored if it fails
    async fn optimistic<U, F>(&self, update: U, call: F) -> Result<(), SessionError>
    where
        U: FnOnce(&mut RepositoriesInfo),
        F: Future<Output = Result<(), TransportError>>,
    {
        let previous = {
            let mut state = self.state.lock();
            let previous = state.repositories.clone();
            if let Some(info) = state.repositories.as_mut() {
                update(info);
            }
            previous
        };

        let result = call.await;
        if let Err(err) = &result {
            warn!(error = %err, "settings update failed, rolling back");
            self.state.lock().repositories = previous;
        }

        if let Err(err) = self.load_repositories_info().await {
            warn!(error = %err, "failed to re-fetch repositories info");
        }

        result.map_err(SessionError::from)
    }
}
