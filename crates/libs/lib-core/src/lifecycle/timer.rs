//! Timer seam for the delays between phases.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the current attempt without blocking the event loop.
///
/// Futures are not required to be `Send`; the browser timer is single-threaded.
#[async_trait(?Send)]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Resolves immediately. Useful in tests and for instant replays.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateSleeper;

#[async_trait(?Send)]
impl Sleeper for ImmediateSleeper {
    async fn sleep(&self, _duration: Duration) {}
}
