mod backend;
mod error;
mod gate;
mod session;

pub use backend::{CommandBackend, TransportError};
pub use error::SessionError;
pub use gate::{LoadingGate, LoadingGuard};
pub use session::{ProjectSession, UserAction};
