use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

/// Performs page redirects on behalf of a controller
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// Server-side navigator: the client follows the location it reads from the
/// page view, so here the redirect is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, location: &str) {
        info!(location, "redirecting");
    }
}

/// A redirect waiting for its delay to elapse
#[derive(Debug)]
pub struct ScheduledRedirect {
    location: String,
    handle: JoinHandle<()>,
}

impl ScheduledRedirect {
    /// Navigates to `location` after `delay`, then calls `on_fire`.
    /// Dropping the returned value does not cancel the redirect.
    pub fn schedule<F>(
        navigator: Arc<dyn Navigator>,
        location: String,
        delay: Duration,
        on_fire: F,
    ) -> Self
    where
        F: FnOnce(&str) + Send + 'static,
    {
        let target = location.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(&target);
            on_fire(&target);
        });

        Self { location, handle }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn has_fired(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        self.handle.abort();
    }
}
