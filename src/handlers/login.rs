use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::config::Timings;
use crate::error::AppError;
use crate::handlers::lock;
use crate::handlers::navigator::{Navigator, ScheduledRedirect};
use crate::handlers::notifier::Notifier;
use crate::models::credentials::{Credential, CredentialBook, Role};
use crate::models::field::{FieldVerdict, LoginField};
use crate::models::notification::Notification;
use crate::validation::validator::validate_login_field;

#[derive(Debug, Default)]
struct LoginState {
    tab: Role,
    remember: bool,
    redirected_to: Option<String>,
}

struct LoginInner {
    credentials: CredentialBook,
    timings: Timings,
    notifier: Notifier,
    navigator: Arc<dyn Navigator>,
    state: Mutex<LoginState>,
}

/// Controller behind the login page
#[derive(Clone)]
pub struct LoginPage {
    inner: Arc<LoginInner>,
}

#[derive(Debug)]
pub struct LoginSuccess {
    pub role: Role,
    pub notification: Notification,
    pub redirect: ScheduledRedirect,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub tab: Role,
    pub remember: bool,
    pub notification: Option<Notification>,
    pub redirected_to: Option<String>,
}

impl LoginPage {
    pub fn new(credentials: CredentialBook, timings: Timings, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            inner: Arc::new(LoginInner {
                credentials,
                timings,
                notifier: Notifier::new(timings.notification_ttl),
                navigator,
                state: Mutex::new(LoginState::default()),
            }),
        }
    }

    pub fn tab(&self) -> Role {
        lock(&self.inner.state).tab
    }

    pub fn switch_tab(&self, role: Role) {
        lock(&self.inner.state).tab = role;
    }

    pub fn validate_field(&self, field: LoginField, value: &str) -> FieldVerdict {
        validate_login_field(field, value)
    }

    /// Checks the pair against the record of the active tab only
    pub fn submit(&self, identifier: &str, secret: &str) -> Result<LoginSuccess, AppError> {
        let role = self.tab();

        if !self.inner.credentials.authenticate(role, identifier, secret) {
            warn!(?role, "login rejected");
            self.inner.notifier.error(role.failure_message());
            return Err(AppError::InvalidCredentials(role));
        }

        info!(?role, "login accepted");
        let notification = self.inner.notifier.success(role.success_message());

        let page = Arc::downgrade(&self.inner);
        let redirect = ScheduledRedirect::schedule(
            Arc::clone(&self.inner.navigator),
            role.destination().to_string(),
            self.inner.timings.login_redirect_delay,
            move |location| {
                if let Some(page) = page.upgrade() {
                    lock(&page.state).redirected_to = Some(location.to_string());
                }
            },
        );

        Ok(LoginSuccess {
            role,
            notification,
            redirect,
        })
    }

    /// Fills in the user-tab demo record and switches to that tab
    pub fn fill_demo_credentials(&self) -> Credential {
        self.switch_tab(Role::User);
        self.inner
            .notifier
            .success("Demo credentials filled! You can now click Sign In.");
        self.inner.credentials.get(Role::User).clone()
    }

    pub fn set_remember(&self, checked: bool) -> Option<Notification> {
        lock(&self.inner.state).remember = checked;
        checked.then(|| {
            self.inner
                .notifier
                .success("Login credentials will be remembered for 30 days")
        })
    }

    pub fn notification(&self) -> Option<Notification> {
        self.inner.notifier.current()
    }

    pub fn dismiss_notification(&self) {
        self.inner.notifier.dismiss();
    }

    pub fn view(&self) -> LoginView {
        let state = lock(&self.inner.state);
        LoginView {
            tab: state.tab,
            remember: state.remember,
            notification: self.inner.notifier.current(),
            redirected_to: state.redirected_to.clone(),
        }
    }
}
