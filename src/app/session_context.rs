//! Session context for the mock sign-in.
//!
//! Holds the signed-in user for every page. The stored record is read once the
//! config context has settled, and login/signup run on the root scope so that
//! leaving the form does not strand the loading flag.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;

use super::config_context::{use_config, ConfigContext};
use super::hooks::use_view_token;
use crate::error::AuthError;
use crate::session::guard::{decide, GuardDecision};
use crate::session::{Session, SessionStore};
use crate::storage::BrowserStorage;

/// Global session state shared via context
#[derive(Clone)]
pub struct SessionContext {
    session: Signal<Option<Session>>,
    /// Set once the stored record has been read (present or not)
    restored: Signal<bool>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    config: ConfigContext,
    cancel: CancellationToken,
}

impl SessionContext {
    pub fn current(&self) -> Option<Session> {
        (self.session)()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn is_loading(&self) -> bool {
        (self.loading)()
    }

    pub fn error(&self) -> Option<String> {
        (self.error)()
    }

    pub fn clear_error(&self) {
        let mut error = self.error;
        error.set(None);
    }

    /// What a protected page should do right now.
    pub fn decision(&self) -> GuardDecision {
        decide((self.restored)(), self.session.read().as_ref())
    }

    pub fn login(&self, email: String, password: String) {
        self.begin();
        let ctx = self.clone();
        let _ = spawn_forever(async move {
            let result = ctx.store().login(&email, &password, &ctx.cancel).await;
            ctx.finish(result);
        });
    }

    pub fn signup(&self, email: String, password: String, name: String) {
        self.begin();
        let ctx = self.clone();
        let _ = spawn_forever(async move {
            let result = ctx
                .store()
                .signup(&email, &password, &name, &ctx.cancel)
                .await;
            ctx.finish(result);
        });
    }

    pub fn logout(&self) {
        self.store().logout();
        let mut session = self.session;
        session.set(None);
    }

    fn store(&self) -> SessionStore<BrowserStorage> {
        SessionStore::new(BrowserStorage, self.config.get().session)
    }

    fn begin(&self) {
        let mut loading = self.loading;
        let mut error = self.error;
        loading.set(true);
        error.set(None);
    }

    fn finish(&self, result: Result<Session, AuthError>) {
        let mut session = self.session;
        let mut loading = self.loading;
        let mut error = self.error;
        match result {
            Ok(user) => session.set(Some(user)),
            // App is being torn down
            Err(AuthError::Cancelled) => return,
            Err(e) => {
                tracing::debug!("Sign-in failed: {}", e);
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    }

    /// Read the stored record once the storage key is final.
    fn restore_once(&self) {
        if !self.config.is_loaded() || *self.restored.peek() {
            return;
        }
        let mut session = self.session;
        let mut restored = self.restored;
        session.set(self.store().restore());
        restored.set(true);
    }
}

/// Initialize session context provider - call once at app root, after the
/// config provider
pub fn use_session_provider() {
    let session = use_signal(|| None);
    let restored = use_signal(|| false);
    let loading = use_signal(|| false);
    let error = use_signal(|| None);
    let config = use_config();
    let cancel = use_view_token();

    let ctx = use_context_provider(|| SessionContext {
        session,
        restored,
        loading,
        error,
        config,
        cancel,
    });

    // Effects only run in the browser, so SSR output always shows the
    // pending state
    use_effect(move || ctx.restore_once());
}

/// Get session context - use in any component
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
