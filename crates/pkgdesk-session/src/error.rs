use pkgdesk_planner::PlanError;
use thiserror::Error;

use crate::backend::TransportError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidSelection(#[from] PlanError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("another operation is still in progress")]
    Busy,
    #[error("package '{0}' is not in the current package list")]
    UnknownPackage(String),
}
