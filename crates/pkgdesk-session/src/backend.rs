use async_trait::async_trait;
use pkgdesk_core::{PackageRow, RepositoriesInfo};
use pkgdesk_planner::ChangeRequest;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct TransportError {
    pub operation: String,
    pub message: String,
}

impl TransportError {
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Command interface of the backend that owns the registry and the project
/// files. Every call is one request and one response; dropping the returned
/// future is how a caller cancels.
#[async_trait]
pub trait CommandBackend: Send + Sync {
    async fn repositories_info(&self) -> Result<RepositoriesInfo, TransportError>;

    async fn package_rows(&self, project_path: &str) -> Result<Vec<PackageRow>, TransportError>;

    async fn set_show_prerelease_packages(&self, shown: bool) -> Result<(), TransportError>;

    async fn show_repository(&self, id: &str) -> Result<(), TransportError>;

    async fn hide_repository(&self, id: &str) -> Result<(), TransportError>;

    async fn set_hide_local_user_packages(&self, hidden: bool) -> Result<(), TransportError>;

    async fn apply(&self, request: &ChangeRequest) -> Result<(), TransportError>;
}
