//! Mock session store.
//!
//! A session is synthesized from whatever non-empty credentials the user types
//! and persisted as JSON under a single storage key. There is no credential
//! verification.

pub mod guard;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::AuthError;
use crate::storage::KeyValueStore;
use crate::timer::{millis, sleep_or_cancel};

/// Id given to every synthesized session
const MOCK_USER_ID: u32 = 1;

/// Signed-in user as persisted in storage: `{"id":..,"email":..,"name":..}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: u32,
    pub email: String,
    pub name: String,
}

impl Session {
    /// Build a session, falling back to the email's local part for the name.
    pub fn for_email(email: &str, name: Option<&str>) -> Self {
        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => local_part(email).to_string(),
        };
        Self {
            id: MOCK_USER_ID,
            email: email.to_string(),
            name,
        }
    }
}

/// Text before the first `@` (the whole string when there is none).
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Session persistence over a key-value store.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
    config: SessionConfig,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, config: SessionConfig) -> Self {
        Self { store, config }
    }

    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    /// Read the persisted session. A corrupt record is deleted and treated as
    /// logged out.
    pub fn restore(&self) -> Option<Session> {
        let raw = self.store.get(&self.config.storage_key)?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                debug!("Restored session for {}", session.email);
                Some(session)
            }
            Err(e) => {
                warn!("Discarding corrupt stored session: {}", e);
                self.store.remove(&self.config.storage_key);
                None
            }
        }
    }

    /// Mock login: any non-empty email and password succeed after the delay.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> Result<Session, AuthError> {
        self.wait(cancel).await?;

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::for_email(email, None);
        self.persist(&session)?;
        info!("Signed in as {}", session.email);
        Ok(session)
    }

    /// Mock signup: like login, but keeps the supplied display name.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<Session, AuthError> {
        self.wait(cancel).await?;

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidSignup);
        }

        let session = Session::for_email(email, Some(name));
        self.persist(&session)?;
        info!("Created account for {}", session.email);
        Ok(session)
    }

    pub fn logout(&self) {
        self.store.remove(&self.config.storage_key);
        info!("Signed out");
    }

    async fn wait(&self, cancel: &CancellationToken) -> Result<(), AuthError> {
        sleep_or_cancel(millis(self.config.auth_delay_ms), cancel)
            .await
            .map_err(|_| AuthError::Cancelled)
    }

    fn persist(&self, session: &Session) -> Result<(), AuthError> {
        let json = serde_json::to_string(session)
            .map_err(|e| crate::error::StorageError::Write(e.to_string()))?;
        self.store.set(&self.config.storage_key, &json)?;
        Ok(())
    }
}
