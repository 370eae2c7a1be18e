use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use lib_core::lifecycle::Sleeper;

/// `setTimeout`-based sleeper for the browser event loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
