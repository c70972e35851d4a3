use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::cache::{SessionCache, session_cache};
use crate::clock::Clock;
use crate::config::Config;
use crate::error::AppError;
use crate::handlers::login::LoginPage;
use crate::handlers::navigator::Navigator;
use crate::handlers::pickup::PickupPage;

/// Shared by every worker; holds the open page sessions
pub struct AppState {
    pub config: Config,
    clock: Arc<dyn Clock>,
    navigator: Arc<dyn Navigator>,
    login_sessions: SessionCache<LoginPage>,
    pickup_sessions: SessionCache<PickupPage>,
}

impl AppState {
    pub fn new(config: Config, clock: Arc<dyn Clock>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            login_sessions: session_cache(config.session_idle),
            pickup_sessions: session_cache(config.session_idle),
            config,
            clock,
            navigator,
        }
    }

    pub fn open_sessions(&self) -> (u64, u64) {
        (
            self.login_sessions.entry_count(),
            self.pickup_sessions.entry_count(),
        )
    }

    pub async fn open_login(&self) -> (Uuid, LoginPage) {
        let id = Uuid::new_v4();
        let page = LoginPage::new(
            self.config.credentials.clone(),
            self.config.timings,
            Arc::clone(&self.navigator),
        );
        self.login_sessions.insert(id, page.clone()).await;
        debug!(%id, "login page opened");
        (id, page)
    }

    pub async fn login(&self, id: Uuid) -> Result<LoginPage, AppError> {
        self.login_sessions
            .get(&id)
            .await
            .ok_or(AppError::SessionNotFound)
    }

    pub async fn open_pickup(&self) -> (Uuid, PickupPage) {
        let id = Uuid::new_v4();
        let page = PickupPage::new(
            self.config.timings,
            Arc::clone(&self.clock),
            Arc::clone(&self.navigator),
        );
        self.pickup_sessions.insert(id, page.clone()).await;
        debug!(%id, "pickup page opened");
        (id, page)
    }

    pub async fn pickup(&self, id: Uuid) -> Result<PickupPage, AppError> {
        self.pickup_sessions
            .get(&id)
            .await
            .ok_or(AppError::SessionNotFound)
    }
}
