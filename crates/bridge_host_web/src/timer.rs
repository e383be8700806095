//! Event-loop delay adapter backed by `setTimeout`.

use std::time::Duration;

use bridge_host::{TimerFuture, TimerService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser timer adapter.
pub struct WebTimerService;

impl TimerService for WebTimerService {
    fn sleep<'a>(&'a self, duration: Duration) -> TimerFuture<'a, ()> {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(async move { bridge::sleep_ms(ms).await })
    }
}
