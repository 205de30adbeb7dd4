//! Fake host capabilities for driving the mechanisms without a browser.
//!
//! [`ManualScheduler`] is a manual clock: nothing fires until the test calls
//! [`ManualScheduler::advance`]. [`FakeObserver`] records subscriptions and
//! lets the test push visibility crossings by target key.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use crate::host::{RevealTarget, Scheduler, SubscriptionId, TimerId, VisibilityObserver};

// ─────────────────────────────────────────────────────────────────────────────
// Manual clock
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ClockState {
    now: u64,
    next_id: u64,
    /// (due, id) -> callback. Equal due times fire in scheduling order.
    timers: BTreeMap<(u64, u64), Box<dyn FnOnce()>>,
    due_by_id: HashMap<u64, u64>,
    fired: u64,
}

/// Deterministic [`Scheduler`] driven by explicit time advances.
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ClockState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `ms`, firing every timer that comes due.
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now + ms;
        self.advance_to(target);
    }

    /// Move the clock to `target` (no-op if it is in the past).
    ///
    /// Timers scheduled by callbacks fire in the same call when they come
    /// due before `target`.
    pub fn advance_to(&self, target: u64) {
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due_key = state
                    .timers
                    .keys()
                    .next()
                    .copied()
                    .filter(|(due, _)| *due <= target);
                match due_key {
                    Some(key) => {
                        let callback = state.timers.remove(&key);
                        state.due_by_id.remove(&key.1);
                        state.now = state.now.max(key.0);
                        state.fired += 1;
                        callback
                    }
                    None => None,
                }
            };

            match next {
                Some(callback) => callback(),
                None => break,
            }
        }

        let mut state = self.state.borrow_mut();
        state.now = state.now.max(target);
    }

    /// Timers scheduled but neither fired nor cancelled.
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Total callbacks run so far.
    pub fn fired(&self) -> u64 {
        self.state.borrow().fired
    }
}

impl Scheduler for ManualScheduler {
    fn now_ms(&self) -> u64 {
        self.state.borrow().now
    }

    fn schedule(&self, delay_ms: u64, callback: Box<dyn FnOnce()>) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay_ms;
        state.timers.insert((due, id), callback);
        state.due_by_id.insert(id, due);
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        let mut state = self.state.borrow_mut();
        if let Some(due) = state.due_by_id.remove(&id.0) {
            state.timers.remove(&(due, id.0));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fake visibility observer
// ─────────────────────────────────────────────────────────────────────────────

struct Subscription {
    key: String,
    threshold: f32,
    /// Taken out while the callback runs so it can re-enter the observer.
    callback: Option<Box<dyn FnMut(f32)>>,
}

#[derive(Default)]
struct ObserverState {
    next_id: u64,
    subscriptions: BTreeMap<u64, Subscription>,
    total_observed: usize,
}

/// [`VisibilityObserver`] whose crossings are pushed by the test.
#[derive(Default)]
pub struct FakeObserver {
    state: RefCell<ObserverState>,
}

impl FakeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a crossing with `fraction` visible to every live subscription
    /// for `key`. Returns how many callbacks ran.
    pub fn emit(&self, key: &str, fraction: f32) -> usize {
        let ids: Vec<u64> = self
            .state
            .borrow()
            .subscriptions
            .iter()
            .filter(|(_, sub)| sub.key == key)
            .map(|(id, _)| *id)
            .collect();
        self.deliver(&ids, fraction)
    }

    /// Deliver a crossing to every live subscription.
    pub fn emit_all(&self, fraction: f32) -> usize {
        let ids: Vec<u64> = self.state.borrow().subscriptions.keys().copied().collect();
        self.deliver(&ids, fraction)
    }

    fn deliver(&self, ids: &[u64], fraction: f32) -> usize {
        let mut delivered = 0;
        for id in ids {
            let callback = self
                .state
                .borrow_mut()
                .subscriptions
                .get_mut(id)
                .and_then(|sub| sub.callback.take());
            let Some(mut callback) = callback else {
                continue;
            };

            callback(fraction);
            delivered += 1;

            // Put it back unless the callback unsubscribed itself
            if let Some(sub) = self.state.borrow_mut().subscriptions.get_mut(id) {
                sub.callback = Some(callback);
            }
        }
        delivered
    }

    /// Subscriptions not yet released.
    pub fn active_subscriptions(&self) -> usize {
        self.state.borrow().subscriptions.len()
    }

    /// Number of `observe` calls ever made.
    pub fn total_observed(&self) -> usize {
        self.state.borrow().total_observed
    }

    /// Keys of live subscriptions, in subscription order.
    pub fn observed_keys(&self) -> Vec<String> {
        self.state
            .borrow()
            .subscriptions
            .values()
            .map(|sub| sub.key.clone())
            .collect()
    }

    /// Threshold a key was registered with, if it is still observed.
    pub fn threshold_for(&self, key: &str) -> Option<f32> {
        self.state
            .borrow()
            .subscriptions
            .values()
            .find(|sub| sub.key == key)
            .map(|sub| sub.threshold)
    }
}

impl VisibilityObserver for FakeObserver {
    fn observe(
        &self,
        target: &RevealTarget,
        threshold: f32,
        on_crossed: Box<dyn FnMut(f32)>,
    ) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.total_observed += 1;
        state.subscriptions.insert(
            id,
            Subscription {
                key: target.key.clone(),
                threshold,
                callback: Some(on_crossed),
            },
        );
        SubscriptionId(id)
    }

    fn unobserve(&self, id: SubscriptionId) {
        self.state.borrow_mut().subscriptions.remove(&id.0);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_timers_fire_in_due_order() {
        let clock = Rc::new(ManualScheduler::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, tag) in [(300, "c"), (100, "a"), (200, "b"), (100, "a2")] {
            let log = log.clone();
            clock.schedule(delay, Box::new(move || log.borrow_mut().push(tag)));
        }

        clock.advance(250);
        assert_eq!(*log.borrow(), vec!["a", "a2", "b"]);
        assert_eq!(clock.now_ms(), 250);
        assert_eq!(clock.pending(), 1);

        clock.advance(50);
        assert_eq!(*log.borrow(), vec!["a", "a2", "b", "c"]);
    }

    #[test]
    fn test_callback_observes_its_due_time() {
        let clock = Rc::new(ManualScheduler::new());
        let seen = Rc::new(Cell::new(0));
        let (c, s) = (clock.clone(), seen.clone());
        clock.schedule(700, Box::new(move || s.set(c.now_ms())));

        clock.advance(2000);
        assert_eq!(seen.get(), 700);
        assert_eq!(clock.now_ms(), 2000);
    }

    #[test]
    fn test_reentrant_schedule_fires_within_same_advance() {
        let clock = Rc::new(ManualScheduler::new());
        let count = Rc::new(Cell::new(0));
        let (c, n) = (clock.clone(), count.clone());
        clock.schedule(
            100,
            Box::new(move || {
                n.set(n.get() + 1);
                let n = n.clone();
                c.schedule(100, Box::new(move || n.set(n.get() + 1)));
            }),
        );

        clock.advance(250);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let clock = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        let id = clock.schedule(100, Box::new(move || f.set(true)));
        clock.cancel(id);
        clock.cancel(id);

        clock.advance(1000);
        assert!(!fired.get());
        assert_eq!(clock.fired(), 0);
    }

    #[test]
    fn test_emit_targets_key_and_counts_deliveries() {
        let observer = FakeObserver::new();
        let hits = Rc::new(RefCell::new(Vec::new()));
        for key in ["a", "b", "a"] {
            let hits = hits.clone();
            observer.observe(
                &RevealTarget::new(key, None),
                0.3,
                Box::new(move |f| hits.borrow_mut().push((key, f))),
            );
        }

        assert_eq!(observer.emit("a", 0.5), 2);
        assert_eq!(observer.emit("missing", 0.5), 0);
        assert_eq!(hits.borrow().len(), 2);
        assert_eq!(observer.threshold_for("b"), Some(0.3));
    }

    #[test]
    fn test_unobserve_stops_delivery() {
        let observer = FakeObserver::new();
        let id = observer.observe(&RevealTarget::new("a", None), 0.3, Box::new(|_| {}));
        observer.unobserve(id);
        assert_eq!(observer.active_subscriptions(), 0);
        assert_eq!(observer.total_observed(), 1);
        assert_eq!(observer.emit_all(1.0), 0);
    }
}
