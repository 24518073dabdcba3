//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the typed config, the optional upstream remover (absent when the
//! credential is not configured) and the mutex-guarded photo session. The
//! session lock is never held across an await point.

use std::sync::{Arc, Mutex};

use crate::config::AppConfig;
use crate::removebg::BackgroundRemover;
use crate::session::PhotoSession;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// `None` when the upstream credential is missing or a placeholder; the
    /// proxy route then answers with a configuration error.
    pub remover: Option<Arc<dyn BackgroundRemover>>,
    pub session: Arc<Mutex<PhotoSession>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, remover: Option<Arc<dyn BackgroundRemover>>) -> Self {
        Self {
            config: Arc::new(config),
            remover,
            session: Arc::new(Mutex::new(PhotoSession::new())),
        }
    }

    /// Lock the photo session, recovering from a poisoned lock.
    pub fn lock_session(&self) -> std::sync::MutexGuard<'_, PhotoSession> {
        self.session.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
