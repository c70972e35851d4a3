//! Tests for the login page controller

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::RecordingNavigator;
use ewastenet_backend::models::credentials::{Credential, CredentialBook, Role};
use ewastenet_backend::models::field::LoginField;
use ewastenet_backend::models::notification::NotificationKind;
use ewastenet_backend::{AppError, LoginPage, Timings};

fn login_page(navigator: &RecordingNavigator) -> LoginPage {
    LoginPage::new(
        CredentialBook::default(),
        Timings::default(),
        Arc::new(navigator.clone()),
    )
}

/// Test: the user pair succeeds on the user tab and redirects after 2s
#[tokio::test(start_paused = true)]
async fn test_user_login_redirects_to_dashboard() {
    let navigator = RecordingNavigator::new();
    let page = login_page(&navigator);
    assert_eq!(page.tab(), Role::User);

    let success = page.submit("user@ewastenet.com", "user123").unwrap();
    assert_eq!(success.role, Role::User);
    assert_eq!(success.redirect.location(), "user-dashboard.html");
    assert_eq!(
        page.notification().unwrap().message,
        "Login successful! Redirecting to user dashboard..."
    );

    tokio::time::sleep(Duration::from_millis(1990)).await;
    assert!(navigator.visited().is_empty());
    assert!(!success.redirect.has_fired());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(navigator.visited(), vec!["user-dashboard.html"]);
    assert_eq!(
        page.view().redirected_to.as_deref(),
        Some("user-dashboard.html")
    );
}

/// Test: the admin pair succeeds on the admin tab
#[tokio::test(start_paused = true)]
async fn test_admin_login() {
    let navigator = RecordingNavigator::new();
    let page = login_page(&navigator);
    page.switch_tab(Role::Admin);

    let success = page.submit("admin", "admin123").unwrap();
    assert_eq!(success.role, Role::Admin);
    assert_eq!(
        success.notification.message,
        "Admin login successful! Redirecting to admin dashboard..."
    );

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(navigator.visited(), vec!["admin-dashboard.html"]);
}

/// Test: each pair only works on its own tab
#[tokio::test(start_paused = true)]
async fn test_pairs_are_tab_specific() {
    let navigator = RecordingNavigator::new();
    let page = login_page(&navigator);

    let err = page.submit("admin", "admin123").unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials(Role::User)));
    let notification = page.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(
        notification.message,
        "Invalid email or password. Please try again."
    );

    page.switch_tab(Role::Admin);
    let err = page.submit("user@ewastenet.com", "user123").unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials(Role::Admin)));
    assert_eq!(
        page.notification().unwrap().message,
        "Invalid username or password. Please try again."
    );

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(navigator.visited().is_empty());
}

/// Test: failures are not counted, a later correct attempt still succeeds
#[tokio::test(start_paused = true)]
async fn test_no_lockout() {
    let navigator = RecordingNavigator::new();
    let page = login_page(&navigator);

    for _ in 0..10 {
        assert!(page.submit("user@ewastenet.com", "wrong").is_err());
    }
    assert!(page.submit("user@ewastenet.com", "user123").is_ok());
}

/// Test: a cancelled redirect never navigates
#[tokio::test(start_paused = true)]
async fn test_cancelled_redirect() {
    let navigator = RecordingNavigator::new();
    let page = login_page(&navigator);

    let success = page.submit("user@ewastenet.com", "user123").unwrap();
    success.redirect.cancel();

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(navigator.visited().is_empty());
    assert!(page.view().redirected_to.is_none());
}

/// Test: injected credentials replace the demo records
#[tokio::test(start_paused = true)]
async fn test_injected_credentials() {
    let navigator = RecordingNavigator::new();
    let page = LoginPage::new(
        CredentialBook::new(
            Credential::new("ops@example.org", "s3cret!"),
            Credential::new("root", "toor00"),
        ),
        Timings::default(),
        Arc::new(navigator.clone()),
    );

    assert!(page.submit("user@ewastenet.com", "user123").is_err());
    assert!(page.submit("ops@example.org", "s3cret!").is_ok());
}

/// Test: demo fill switches to the user tab and hands back working credentials
#[tokio::test(start_paused = true)]
async fn test_demo_fill() {
    let navigator = RecordingNavigator::new();
    let page = login_page(&navigator);
    page.switch_tab(Role::Admin);

    let credential = page.fill_demo_credentials();
    assert_eq!(page.tab(), Role::User);
    assert_eq!(
        page.notification().unwrap().message,
        "Demo credentials filled! You can now click Sign In."
    );
    assert!(
        page.submit(&credential.identifier, &credential.secret)
            .is_ok()
    );
}

/// Test: remember me only announces itself when ticked
#[tokio::test(start_paused = true)]
async fn test_remember_me() {
    let navigator = RecordingNavigator::new();
    let page = login_page(&navigator);

    assert!(page.set_remember(false).is_none());
    assert!(page.notification().is_none());

    let notification = page.set_remember(true).unwrap();
    assert_eq!(
        notification.message,
        "Login credentials will be remembered for 30 days"
    );
    assert!(page.view().remember);
}

/// Test: login field checks
#[tokio::test(start_paused = true)]
async fn test_field_validation() {
    let navigator = RecordingNavigator::new();
    let page = login_page(&navigator);

    assert!(!page.validate_field(LoginField::UserEmail, "user@").is_valid());
    assert!(!page.validate_field(LoginField::UserPassword, "abc").is_valid());
    assert!(!page.validate_field(LoginField::AdminUsername, "ab").is_valid());
    assert!(page.validate_field(LoginField::AdminPassword, "").is_valid());
}
