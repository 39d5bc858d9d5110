//! Session lifecycle across simulated page reloads.
//!
//! A "reload" is a fresh `SessionStore` over the same backing store, which is
//! what the browser sees when the app boots again with `localStorage` intact.

use cinestream::config::SessionConfig;
use cinestream::error::AuthError;
use cinestream::session::guard::{decide, GuardDecision};
use cinestream::session::SessionStore;
use cinestream::storage::{KeyValueStore, MemoryStore};
use cinestream::timer::millis;
use tokio_util::sync::CancellationToken;

fn boot(backing: &MemoryStore) -> SessionStore<MemoryStore> {
    SessionStore::new(backing.clone(), SessionConfig::default())
}

#[tokio::test(start_paused = true)]
async fn login_survives_reload_until_logout() {
    let backing = MemoryStore::new();
    let token = CancellationToken::new();

    let first = boot(&backing);
    assert_eq!(first.restore(), None);
    assert_eq!(decide(true, first.restore().as_ref()), GuardDecision::RedirectToLogin);

    let session = first.login("viewer@example.com", "hunter2", &token).await.unwrap();
    assert_eq!(session.name, "viewer");

    let second = boot(&backing);
    let restored = second.restore();
    assert_eq!(restored.as_ref(), Some(&session));
    assert_eq!(decide(true, restored.as_ref()), GuardDecision::Allow);

    second.logout();
    assert_eq!(boot(&backing).restore(), None);
    assert!(backing.is_empty());
}

#[tokio::test(start_paused = true)]
async fn signup_keeps_the_given_name() {
    let backing = MemoryStore::new();
    let token = CancellationToken::new();
    let sessions = boot(&backing);

    let named = sessions
        .signup("sam@example.com", "pw", "Sam Rivera", &token)
        .await
        .unwrap();
    assert_eq!(named.name, "Sam Rivera");
    assert_eq!(boot(&backing).restore().unwrap().name, "Sam Rivera");

    let unnamed = sessions.signup("kit@example.com", "pw", "", &token).await.unwrap();
    assert_eq!(unnamed.name, "kit");
    assert_eq!(unnamed.id, named.id);
}

#[tokio::test(start_paused = true)]
async fn failed_signup_leaves_previous_session() {
    let backing = MemoryStore::new();
    let token = CancellationToken::new();
    let sessions = boot(&backing);

    sessions.login("a@b.com", "x", &token).await.unwrap();
    let err = sessions.signup("", "pw", "Nobody", &token).await.unwrap_err();

    assert_eq!(err, AuthError::InvalidSignup);
    assert_eq!(err.to_string(), "Invalid signup information");
    assert_eq!(boot(&backing).restore().unwrap().email, "a@b.com");
}

#[tokio::test(start_paused = true)]
async fn storage_key_is_configurable() {
    let backing = MemoryStore::new();
    let token = CancellationToken::new();
    let custom = SessionStore::new(
        backing.clone(),
        SessionConfig {
            storage_key: "other_app_user".to_string(),
            auth_delay_ms: 0,
        },
    );

    custom.login("a@b.com", "x", &token).await.unwrap();

    assert!(backing.get("other_app_user").is_some());
    assert!(backing.get("cinestream_user").is_none());
    assert_eq!(boot(&backing).restore(), None);
}

#[tokio::test(start_paused = true)]
async fn teardown_during_login_persists_nothing() {
    let backing = MemoryStore::new();
    let token = CancellationToken::new();
    let sessions = boot(&backing);

    let (result, _) = tokio::join!(sessions.login("a@b.com", "x", &token), async {
        tokio::time::sleep(millis(400)).await;
        token.cancel();
    });

    assert_eq!(result, Err(AuthError::Cancelled));
    assert!(backing.is_empty());
}
