//! Host capabilities consumed by the reveal tracker and the effect scheduler.
//!
//! The browser supplies timers and an intersection observer; tests supply
//! the fakes in [`crate::testing`]. Everything runs on one thread, so
//! capabilities are shared as `Rc<dyn ...>` and take `&self`.

use rand::Rng;
use rand::rngs::SmallRng;

/// Handle returned by [`Scheduler::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Handle returned by [`VisibilityObserver::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// Deferred-callback timer facility.
///
/// Implementations must never run a callback from inside `schedule` or
/// `cancel`; callers may hold a `RefCell` borrow across both.
pub trait Scheduler {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&self) -> u64;

    /// Run `callback` once, `delay_ms` from now.
    fn schedule(&self, delay_ms: u64, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Drop a pending callback. Unknown or already-fired ids are ignored.
    fn cancel(&self, id: TimerId);
}

/// An element the reveal tracker can observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    /// Host-specific handle used to locate the element (a DOM id in the browser).
    pub key: String,
    /// Raw `data-index` attribute, if the element carries one.
    pub index_attr: Option<String>,
}

impl RevealTarget {
    pub fn new(key: impl Into<String>, index_attr: Option<String>) -> Self {
        Self {
            key: key.into(),
            index_attr,
        }
    }

    /// Target whose index attribute is the given position.
    pub fn indexed(key: impl Into<String>, index: u32) -> Self {
        Self::new(key, Some(index.to_string()))
    }
}

/// Intersection/visibility notification channel.
pub trait VisibilityObserver {
    /// Start watching `target`. `on_crossed` receives the visible fraction
    /// each time it crosses `threshold`, possibly repeatedly and in any order
    /// relative to other targets. `0.0` means not intersecting.
    fn observe(
        &self,
        target: &RevealTarget,
        threshold: f32,
        on_crossed: Box<dyn FnMut(f32)>,
    ) -> SubscriptionId;

    /// Stop delivering notifications for `id`. Unknown ids are ignored.
    fn unobserve(&self, id: SubscriptionId);
}

/// Source of the random extra delay added to each periodic effect cycle.
pub trait JitterSource {
    /// A value in `0..=range_ms`.
    fn jitter_ms(&mut self, range_ms: u64) -> u64;
}

/// Jitter source that always returns zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn jitter_ms(&mut self, _range_ms: u64) -> u64 {
        0
    }
}

impl JitterSource for SmallRng {
    fn jitter_ms(&mut self, range_ms: u64) -> u64 {
        if range_ms == 0 {
            0
        } else {
            self.gen_range(0..=range_ms)
        }
    }
}
