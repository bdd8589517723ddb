use std::time::{Duration, Instant};

use crate::foundation::core::Dimensions;

/// Trailing-edge coalescing of resize notifications.
///
/// The host pushes every resize it observes and polls on its own schedule; the latest
/// dimensions are released once no resize has arrived for `delay`. No timers live in here.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(Instant, Dimensions)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl ResizeDebouncer {
    /// Delay used by the original browser effect.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(10);

    /// Debouncer with a fixed quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a resize at `now`, replacing any pending one and restarting the quiet period.
    pub fn push(&mut self, now: Instant, dims: Dimensions) {
        self.pending = Some((now + self.delay, dims));
    }

    /// Whether a resize is waiting to be released.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending resize becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(at, _)| at)
    }

    /// Release the latest dimensions if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Dimensions> {
        match self.pending {
            Some((at, dims)) if now >= at => {
                self.pending = None;
                Some(dims)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/debounce.rs"]
mod tests;
