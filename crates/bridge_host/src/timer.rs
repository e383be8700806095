//! Delay contracts used by simulated host round-trips.

use std::{future::Future, pin::Pin, time::Duration};

/// Object-safe boxed future used by [`TimerService`].
pub type TimerFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that resolves after a delay on the host's event loop.
pub trait TimerService {
    /// Resolves once `duration` has elapsed.
    fn sleep<'a>(&'a self, duration: Duration) -> TimerFuture<'a, ()>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Timer that resolves immediately; used by headless hosts and tests.
pub struct ImmediateTimerService;

impl TimerService for ImmediateTimerService {
    fn sleep<'a>(&'a self, _duration: Duration) -> TimerFuture<'a, ()> {
        Box::pin(async {})
    }
}
