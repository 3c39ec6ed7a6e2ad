use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::SessionError;

// single-flight flag for mutating backend calls; refuses instead of queueing
#[derive(Debug, Clone, Default)]
pub struct LoadingGate {
    loading: Arc<AtomicBool>,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn try_acquire(&self) -> Result<LoadingGuard, SessionError> {
        self.loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SessionError::Busy)?;
        Ok(LoadingGuard {
            loading: Arc::clone(&self.loading),
        })
    }
}

#[derive(Debug)]
pub struct LoadingGuard {
    loading: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.loading.store(false, Ordering::Release);
    }
}
