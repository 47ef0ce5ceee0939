//! Integration tests for account lifecycle and provider connections.

mod helpers;

use droplink_core::ErrorKind;
use droplink_domain::traits::{CredentialStore, UserStore};
use droplink_service::UpdateProfileRequest;

use helpers::{FAILING_PROVIDER_ID, TEST_PROVIDER_ID, TestApp};

#[tokio::test]
async fn test_register_then_authenticate() {
    let app = TestApp::new();

    let user = app
        .account
        .register("drew@example.com", "Drew", "secret")
        .await
        .expect("register");
    assert_eq!(user.email, "drew@example.com");
    assert_ne!(user.password_hash, "secret");

    let credentials = app
        .account
        .authenticate("drew@example.com", "secret")
        .await
        .expect("authenticate");
    assert_eq!(credentials.token, format!("token-{}", user.id));
}

#[tokio::test]
async fn test_register_duplicate_email_rejected() {
    let app = TestApp::new();
    app.register_user("drew@example.com").await;

    let err = app
        .account
        .register("drew@example.com", "Other", "pw")
        .await
        .expect_err("must fail");
    assert_eq!(err.kind, ErrorKind::DuplicateEmail);
}

#[tokio::test]
async fn test_authenticate_failures() {
    let app = TestApp::new();
    app.register_user("drew@example.com").await;

    let err = app
        .account
        .authenticate("nobody@example.com", "secret")
        .await
        .expect_err("unknown email");
    assert_eq!(err.kind, ErrorKind::UserNotFound);

    let err = app
        .account
        .authenticate("drew@example.com", "wrong")
        .await
        .expect_err("wrong password");
    assert_eq!(err.kind, ErrorKind::InvalidPassword);
}

#[tokio::test]
async fn test_update_profile_name_only() {
    let app = TestApp::new();
    let (user, _) = app.register_user("drew@example.com").await;

    let updated = app
        .account
        .update_profile(
            user.id,
            UpdateProfileRequest {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.name, "Renamed");

    // The password is untouched.
    app.account
        .authenticate("drew@example.com", "secret")
        .await
        .expect("old password still valid");
}

#[tokio::test]
async fn test_update_profile_password_requires_current_password() {
    let app = TestApp::new();
    let (user, _) = app.register_user("drew@example.com").await;

    let err = app
        .account
        .update_profile(
            user.id,
            UpdateProfileRequest {
                new_password: Some("next".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect_err("missing current password");
    assert_eq!(err.kind, ErrorKind::InvalidPassword);

    let err = app
        .account
        .update_profile(
            user.id,
            UpdateProfileRequest {
                new_password: Some("next".to_string()),
                old_password: Some("wrong".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect_err("wrong current password");
    assert_eq!(err.kind, ErrorKind::InvalidPassword);

    app.account
        .update_profile(
            user.id,
            UpdateProfileRequest {
                new_password: Some("next".to_string()),
                old_password: Some("secret".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("correct current password");

    app.account
        .authenticate("drew@example.com", "next")
        .await
        .expect("new password works");
    let err = app
        .account
        .authenticate("drew@example.com", "secret")
        .await
        .expect_err("old password revoked");
    assert_eq!(err.kind, ErrorKind::InvalidPassword);
}

#[tokio::test]
async fn test_password_recovery_flow() {
    let app = TestApp::with_tokens(["tok-1"]);
    app.register_user("drew@example.com").await;

    app.account
        .request_password_recovery("drew@example.com")
        .await
        .expect("request recovery");

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.address, "drew@example.com");
    assert_eq!(sent[0].subject, "Recover Password");
    let expected_link =
        "https://droplink.test/recover-password?token=tok-1&email=drew@example.com";
    assert!(sent[0].plain_body.contains(expected_link));
    assert!(sent[0].html_body.contains(expected_link));

    app.account
        .recover_password("drew@example.com", "tok-1", "reset")
        .await
        .expect("recover");

    app.account
        .authenticate("drew@example.com", "reset")
        .await
        .expect("new password works");

    // Redeeming consumed the token.
    let err = app
        .account
        .recover_password("drew@example.com", "tok-1", "again")
        .await
        .expect_err("token consumed");
    assert_eq!(err.kind, ErrorKind::UserNotFound);
}

#[tokio::test]
async fn test_recovery_rejects_empty_and_mismatched_tokens() {
    let app = TestApp::with_tokens(["tok-1"]);
    app.register_user("drew@example.com").await;
    app.account
        .request_password_recovery("drew@example.com")
        .await
        .expect("request recovery");

    let err = app
        .account
        .recover_password("drew@example.com", "", "reset")
        .await
        .expect_err("empty token");
    assert_eq!(err.kind, ErrorKind::UserNotFound);

    let err = app
        .account
        .recover_password("drew@example.com", "tok-9", "reset")
        .await
        .expect_err("mismatched token");
    assert_eq!(err.kind, ErrorKind::UserNotFound);

    // The failed attempts left the real token intact.
    app.account
        .recover_password("drew@example.com", "tok-1", "reset")
        .await
        .expect("real token still works");
}

#[tokio::test]
async fn test_recovery_expired_token() {
    let app = TestApp::with_tokens(["tok-1"]);
    let (user, _) = app.register_user("drew@example.com").await;
    app.account
        .request_password_recovery("drew@example.com")
        .await
        .expect("request recovery");

    let mut stored = app
        .users
        .find_by_id(user.id)
        .await
        .expect("find")
        .expect("exists");
    stored.recover_password_token_expiry =
        Some(chrono::Utc::now() - chrono::Duration::minutes(1));
    app.users.update(&stored).await.expect("backdate expiry");

    let err = app
        .account
        .recover_password("drew@example.com", "tok-1", "reset")
        .await
        .expect_err("expired token");
    assert_eq!(err.kind, ErrorKind::TokenExpired);
}

#[tokio::test]
async fn test_recovery_rerequest_overwrites_outstanding_token() {
    let app = TestApp::with_tokens(["tok-1", "tok-2"]);
    app.register_user("drew@example.com").await;

    app.account
        .request_password_recovery("drew@example.com")
        .await
        .expect("first request");
    app.account
        .request_password_recovery("drew@example.com")
        .await
        .expect("second request");

    let err = app
        .account
        .recover_password("drew@example.com", "tok-1", "reset")
        .await
        .expect_err("first token overwritten");
    assert_eq!(err.kind, ErrorKind::UserNotFound);

    app.account
        .recover_password("drew@example.com", "tok-2", "reset")
        .await
        .expect("latest token works");
}

#[tokio::test]
async fn test_recovery_unknown_email_sends_nothing() {
    let app = TestApp::new();

    let err = app
        .account
        .request_password_recovery("nobody@example.com")
        .await
        .expect_err("unknown email");
    assert_eq!(err.kind, ErrorKind::UserNotFound);
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_connect_provider_stores_account_info() {
    let app = TestApp::new();
    let (user, _) = app.register_user("drew@example.com").await;

    app.account
        .connect_storage_provider(user.id, TEST_PROVIDER_ID, "provider-token")
        .await
        .expect("connect");

    let listed = app
        .account
        .list_storage_providers(user.id)
        .await
        .expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].provider_id, TEST_PROVIDER_ID);
    assert_eq!(listed[0].email, "storage@example.com");
    assert_eq!(listed[0].photo, "https://example.com/photo.jpg");
    assert_eq!(listed[0].provider_credential, "provider-token");
}

#[tokio::test]
async fn test_connect_twice_replaces_in_place() {
    let app = TestApp::new();
    let (user, _) = app.register_user("drew@example.com").await;

    app.account
        .connect_storage_provider(user.id, TEST_PROVIDER_ID, "token-a")
        .await
        .expect("first connect");
    let first = app
        .account
        .list_storage_providers(user.id)
        .await
        .expect("list")
        .remove(0);

    app.account
        .connect_storage_provider(user.id, TEST_PROVIDER_ID, "token-b")
        .await
        .expect("second connect");
    let listed = app
        .account
        .list_storage_providers(user.id)
        .await
        .expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[0].provider_credential, "token-b");
}

#[tokio::test]
async fn test_connect_unknown_provider_rejected() {
    let app = TestApp::new();
    let (user, _) = app.register_user("drew@example.com").await;

    let err = app
        .account
        .connect_storage_provider(user.id, droplink_core::types::ProviderId::new(99), "tok")
        .await
        .expect_err("unknown provider");
    assert_eq!(err.kind, ErrorKind::InvalidProvider);
    assert!(app
        .account
        .list_storage_providers(user.id)
        .await
        .expect("list")
        .is_empty());
}

#[tokio::test]
async fn test_connect_provider_failure_leaves_no_credential() {
    let app = TestApp::new();
    let (user, _) = app.register_user("drew@example.com").await;

    let err = app
        .account
        .connect_storage_provider(user.id, FAILING_PROVIDER_ID, "bad-token")
        .await
        .expect_err("provider rejects the token");
    assert_eq!(err.kind, ErrorKind::ExternalService);
    assert!(app
        .account
        .list_storage_providers(user.id)
        .await
        .expect("list")
        .is_empty());
}

#[tokio::test]
async fn test_disconnect_is_idempotent() {
    let app = TestApp::new();
    let (user, _) = app.register_connected_user("drew@example.com").await;

    app.account
        .disconnect_storage_provider(user.id, TEST_PROVIDER_ID)
        .await
        .expect("disconnect");
    assert!(app
        .account
        .list_storage_providers(user.id)
        .await
        .expect("list")
        .is_empty());

    // Disconnecting again is a no-op.
    app.account
        .disconnect_storage_provider(user.id, TEST_PROVIDER_ID)
        .await
        .expect("second disconnect");
}

#[tokio::test]
async fn test_disconnect_leaves_other_users_untouched() {
    let app = TestApp::new();
    let (alice, _) = app.register_connected_user("alice@example.com").await;
    let (bob, _) = app.register_connected_user("bob@example.com").await;

    app.account
        .disconnect_storage_provider(alice.id, TEST_PROVIDER_ID)
        .await
        .expect("disconnect alice");

    let bobs = app
        .account
        .list_storage_providers(bob.id)
        .await
        .expect("list");
    assert_eq!(bobs.len(), 1);
    assert!(app
        .credentials
        .find_by_id(bobs[0].id)
        .await
        .expect("find")
        .is_some());
}

#[tokio::test]
async fn test_update_storage_token_sets_and_clears() {
    let app = TestApp::new();
    let (user, _) = app.register_user("drew@example.com").await;

    let updated = app
        .account
        .update_storage_token(user.id, Some("dropbox-token".to_string()))
        .await
        .expect("set token");
    assert_eq!(updated.dropbox_token.as_deref(), Some("dropbox-token"));

    let updated = app
        .account
        .update_storage_token(user.id, None)
        .await
        .expect("clear token");
    assert!(updated.dropbox_token.is_none());
}
