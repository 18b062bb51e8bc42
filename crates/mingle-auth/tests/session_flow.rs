//! Integration tests for the session lifecycle: login, silent refresh,
//! logout, and password reset against an in-memory credential store.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use mingle_auth::jwt::JwtDecoder;
use mingle_auth::password::PasswordHasher;
use mingle_auth::session::SessionManager;
use mingle_auth::store::MemoryCredentialStore;
use mingle_core::config::auth::AuthConfig;
use mingle_core::error::ErrorKind;
use mingle_core::result::AppResult;
use mingle_core::traits::mailer::ResetMailer;
use mingle_entity::user::{CreateUser, User};

/// Mailer spy recording every (first_name, email) pair it was asked to send.
#[derive(Debug, Default)]
struct RecordingMailer {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl ResetMailer for RecordingMailer {
    async fn send_password_reset(&self, first_name: &str, email: &str) -> AppResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((first_name.to_string(), email.to_string()));
        Ok(())
    }
}

struct TestHarness {
    manager: SessionManager,
    store: Arc<MemoryCredentialStore>,
    mailer: Arc<RecordingMailer>,
    decoder: JwtDecoder,
}

fn test_config() -> AuthConfig {
    AuthConfig {
        access_token_secret: "integration-access-secret".to_string(),
        refresh_token_secret: "integration-refresh-secret".to_string(),
        access_ttl_days: 7,
        refresh_ttl_days: 7,
    }
}

fn harness() -> TestHarness {
    let config = test_config();
    let store = Arc::new(MemoryCredentialStore::new());
    let mailer = Arc::new(RecordingMailer::default());
    let manager = SessionManager::new(store.clone(), mailer.clone(), config.clone());
    TestHarness {
        manager,
        store,
        mailer,
        decoder: JwtDecoder::new(&config),
    }
}

fn seed_user(store: &MemoryCredentialStore, email: &str, password: &str) -> User {
    let hasher = PasswordHasher::new();
    store
        .insert(CreateUser {
            email: email.to_string(),
            password_hash: hasher.hash_password(password).unwrap(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        })
        .unwrap()
}

#[tokio::test]
async fn login_then_refresh_yields_new_token_for_same_user() {
    let h = harness();
    let user = seed_user(&h.store, "a@b.com", "secret");

    let login = h.manager.login("a@b.com", "secret").await.unwrap();
    assert_eq!(login.message, "Login successfully");
    assert!(!login.access_token.is_empty());
    assert!(!login.refresh_cookie.is_clearing());
    assert!(!login.refresh_cookie.value.is_empty());

    let refreshed = h
        .manager
        .refresh(Some(&login.refresh_cookie.value))
        .await
        .unwrap();

    assert_ne!(refreshed.access_token, login.access_token);
    let claims = h.decoder.decode_access_token(&refreshed.access_token).unwrap();
    assert_eq!(claims.sub, user.id);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let h = harness();
    seed_user(&h.store, "a@b.com", "secret");

    let err = h.manager.login("a@b.com", "nope").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
}

#[tokio::test]
async fn login_with_unknown_email_is_not_found() {
    let h = harness();
    let err = h.manager.login("ghost@b.com", "secret").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn login_with_missing_inputs_is_validation() {
    let h = harness();
    let err = h.manager.login("", "secret").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let err = h.manager.login("a@b.com", "").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn login_with_malformed_email_is_validation() {
    let h = harness();
    let err = h.manager.login("not-an-email", "secret").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn refresh_without_cookie_is_unauthenticated() {
    let h = harness();
    let err = h.manager.refresh(None).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn refresh_with_tampered_cookie_is_forbidden() {
    let h = harness();
    seed_user(&h.store, "a@b.com", "secret");

    let login = h.manager.login("a@b.com", "secret").await.unwrap();
    let tampered = format!("{}x", login.refresh_cookie.value);

    let err = h.manager.refresh(Some(&tampered)).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
}

#[tokio::test]
async fn refresh_with_access_token_in_cookie_is_forbidden() {
    let h = harness();
    seed_user(&h.store, "a@b.com", "secret");

    let login = h.manager.login("a@b.com", "secret").await.unwrap();

    // The access token is signed with the wrong secret for this slot.
    let err = h.manager.refresh(Some(&login.access_token)).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
}

#[tokio::test]
async fn refresh_after_account_deletion_is_unauthenticated() {
    let h = harness();
    let user = seed_user(&h.store, "a@b.com", "secret");

    let login = h.manager.login("a@b.com", "secret").await.unwrap();
    h.store.remove(&user.id);

    let err = h
        .manager
        .refresh(Some(&login.refresh_cookie.value))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn logout_clears_the_cookie() {
    let h = harness();
    seed_user(&h.store, "a@b.com", "secret");

    let login = h.manager.login("a@b.com", "secret").await.unwrap();
    let logout = h.manager.logout(Some(&login.refresh_cookie.value)).unwrap();

    assert_eq!(logout.message, "Logout successfully");
    assert!(logout.clear_cookie.is_clearing());
}

#[tokio::test]
async fn logout_without_cookie_is_unauthenticated() {
    let h = harness();
    let err = h.manager.logout(None).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn logout_does_not_invalidate_the_refresh_token() {
    // Stateless trade-off: no blacklist, the raw token keeps working.
    let h = harness();
    seed_user(&h.store, "a@b.com", "secret");

    let login = h.manager.login("a@b.com", "secret").await.unwrap();
    h.manager.logout(Some(&login.refresh_cookie.value)).unwrap();

    let refreshed = h.manager.refresh(Some(&login.refresh_cookie.value)).await;
    assert!(refreshed.is_ok());
}

#[tokio::test]
async fn reset_password_replaces_digest_and_mails_the_user() {
    let h = harness();
    seed_user(&h.store, "a@b.com", "old-secret");

    let reset = h
        .manager
        .reset_password("a@b.com", "new-secret")
        .await
        .unwrap();
    assert_eq!(reset.message, "Password has been reset");

    let err = h.manager.login("a@b.com", "old-secret").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert!(h.manager.login("a@b.com", "new-secret").await.is_ok());

    let sent = h.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], ("Ada".to_string(), "a@b.com".to_string()));
}

#[tokio::test]
async fn reset_password_survives_a_failing_mail_gateway() {
    // Mail delivery is fire-and-forget: a gateway failure must not roll
    // back the already-persisted digest or fail the operation.
    struct BrokenMailer;

    #[async_trait]
    impl ResetMailer for BrokenMailer {
        async fn send_password_reset(&self, _first_name: &str, _email: &str) -> AppResult<()> {
            Err(mingle_core::error::AppError::internal(
                "mail gateway unreachable",
            ))
        }
    }

    let config = test_config();
    let store = Arc::new(MemoryCredentialStore::new());
    let manager = SessionManager::new(store.clone(), Arc::new(BrokenMailer), config);
    seed_user(&store, "a@b.com", "old-secret");

    let reset = manager
        .reset_password("a@b.com", "new-secret")
        .await
        .unwrap();
    assert_eq!(reset.message, "Password has been reset");

    let err = manager.login("a@b.com", "old-secret").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert!(manager.login("a@b.com", "new-secret").await.is_ok());
}

#[tokio::test]
async fn reset_password_for_unknown_email_is_not_found() {
    let h = harness();
    let err = h
        .manager
        .reset_password("ghost@b.com", "new-secret")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(h.mailer.sent.lock().unwrap().is_empty());
}
