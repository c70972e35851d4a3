use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

// upper bound on open page sessions
const MAX_SESSIONS: u64 = 10_000;

pub type SessionCache<P> = Cache<Uuid, P>;

/// Page sessions expire after `idle` without a request
pub fn session_cache<P>(idle: Duration) -> SessionCache<P>
where
    P: Clone + Send + Sync + 'static,
{
    Cache::builder()
        .max_capacity(MAX_SESSIONS)
        .time_to_idle(idle)
        .build()
}
