//! Tests for the reveal tracker
//!
//! Verifies one-way reveal semantics, threshold handling and teardown.

use std::cell::RefCell;
use std::rc::Rc;

use folio_types::{MalformedIndexPolicy, RevealConfig};

use super::tracker::RevealTracker;
use crate::host::{RevealTarget, SubscriptionId, VisibilityObserver};
use crate::testing::FakeObserver;

fn targets(indices: &[u32]) -> Vec<RevealTarget> {
    indices
        .iter()
        .map(|i| RevealTarget::indexed(format!("item-{}", i), *i))
        .collect()
}

fn make_tracker(observer: &Rc<FakeObserver>, indices: &[u32]) -> RevealTracker {
    let mut tracker = RevealTracker::new(observer.clone(), &RevealConfig::default());
    tracker.observe_all(targets(indices));
    tracker
}

// ─────────────────────────────────────────────────────────────────────────────
// Reveal semantics
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_only_crossed_index_is_revealed() {
    let observer = Rc::new(FakeObserver::new());
    let tracker = make_tracker(&observer, &[0, 1, 2]);

    observer.emit("item-1", 0.4);

    assert!(!tracker.is_revealed(0));
    assert!(tracker.is_revealed(1));
    assert!(!tracker.is_revealed(2));
}

#[test]
fn test_reveal_is_monotonic_under_repeated_notifications() {
    let observer = Rc::new(FakeObserver::new());
    let tracker = make_tracker(&observer, &[0, 1]);

    observer.emit("item-0", 0.9);
    // Scrolled back out, then partially in, then fully in again
    observer.emit("item-0", 0.0);
    observer.emit("item-0", 0.1);
    observer.emit("item-0", 1.0);

    assert!(tracker.is_revealed(0));
    assert_eq!(tracker.revealed_count(), 1);
}

#[test]
fn test_never_crossed_indices_stay_hidden() {
    let observer = Rc::new(FakeObserver::new());
    let tracker = make_tracker(&observer, &[0, 1, 2, 3]);

    observer.emit("item-2", 0.5);
    observer.emit("item-2", 0.5);

    for i in [0, 1, 3, 42] {
        assert!(!tracker.is_revealed(i), "index {} should stay hidden", i);
    }
}

#[test]
fn test_below_threshold_does_not_reveal() {
    let observer = Rc::new(FakeObserver::new());
    let tracker = make_tracker(&observer, &[0]);

    observer.emit("item-0", 0.29);
    assert!(!tracker.is_revealed(0));

    observer.emit("item-0", 0.3);
    assert!(tracker.is_revealed(0));
}

#[test]
fn test_out_of_order_notifications() {
    let observer = Rc::new(FakeObserver::new());
    let tracker = make_tracker(&observer, &[0, 1, 2, 3, 4]);

    for key in ["item-4", "item-0", "item-3", "item-0", "item-4"] {
        observer.emit(key, 1.0);
    }

    assert_eq!(tracker.revealed(), vec![0, 3, 4]);
}

#[test]
fn test_threshold_passed_to_observer() {
    let observer = Rc::new(FakeObserver::new());
    let config = RevealConfig {
        threshold: 0.6,
        ..RevealConfig::default()
    };
    let mut tracker = RevealTracker::new(observer.clone(), &config);
    tracker.observe_all(targets(&[0]));

    assert_eq!(observer.threshold_for("item-0"), Some(0.6));
    assert_eq!(tracker.threshold(), 0.6);
}

#[test]
fn test_out_of_range_threshold_is_clamped() {
    let observer = Rc::new(FakeObserver::new());
    let config = RevealConfig {
        threshold: 4.0,
        ..RevealConfig::default()
    };
    let mut tracker = RevealTracker::new(observer.clone(), &config);
    tracker.observe_all(targets(&[0]));

    observer.emit("item-0", 0.99);
    assert!(!tracker.is_revealed(0));
    observer.emit("item-0", 1.0);
    assert!(tracker.is_revealed(0));
}

#[test]
fn test_zero_threshold_ignores_non_intersecting_reports() {
    for threshold in [0.0, -0.5] {
        let observer = Rc::new(FakeObserver::new());
        let config = RevealConfig {
            threshold,
            ..RevealConfig::default()
        };
        let mut tracker = RevealTracker::new(observer.clone(), &config);
        tracker.observe_all(targets(&[0, 1]));
        assert_eq!(tracker.threshold(), 0.0);

        // Initial "not intersecting" report every observer sends on subscribe
        observer.emit_all(0.0);
        assert!(!tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));

        observer.emit("item-1", 0.01);
        assert_eq!(tracker.revealed(), vec![1]);
    }
}

#[test]
fn test_nan_fraction_does_not_reveal() {
    let observer = Rc::new(FakeObserver::new());
    let tracker = make_tracker(&observer, &[0]);
    observer.emit("item-0", f32::NAN);
    assert!(!tracker.is_revealed(0));
}

#[test]
fn test_empty_target_list_is_noop() {
    let observer = Rc::new(FakeObserver::new());
    let mut tracker = RevealTracker::new(observer.clone(), &RevealConfig::default());

    assert_eq!(tracker.observe_all(Vec::new()), 0);
    assert!(!tracker.is_observing());
    assert_eq!(observer.active_subscriptions(), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Listeners
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_listener_fires_once_per_new_index() {
    let observer = Rc::new(FakeObserver::new());
    let tracker = make_tracker(&observer, &[0, 1]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    tracker.on_reveal(move |i| s.borrow_mut().push(i));

    observer.emit("item-1", 1.0);
    observer.emit("item-1", 1.0);
    observer.emit("item-0", 1.0);

    assert_eq!(*seen.borrow(), vec![1, 0]);
}

#[test]
fn test_listener_can_query_tracker_state() {
    let observer = Rc::new(FakeObserver::new());
    let tracker = Rc::new(RefCell::new(make_tracker(&observer, &[0])));
    let snapshot = Rc::new(RefCell::new(None));

    let (t, s) = (Rc::downgrade(&tracker), snapshot.clone());
    tracker.borrow().on_reveal(move |i| {
        if let Some(t) = t.upgrade() {
            *s.borrow_mut() = Some(t.borrow().is_revealed(i));
        }
    });

    observer.emit("item-0", 1.0);
    assert_eq!(*snapshot.borrow(), Some(true));
}

#[test]
fn test_reveal_raised_from_listener_reaches_every_listener_in_order() {
    let observer = Rc::new(FakeObserver::new());
    let tracker = make_tracker(&observer, &[0, 1]);

    // Revealing item 0 scrolls item 1 into view from inside the callback
    let o = Rc::downgrade(&observer);
    tracker.on_reveal(move |i| {
        if i == 0 {
            if let Some(o) = o.upgrade() {
                o.emit("item-1", 1.0);
            }
        }
    });
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    tracker.on_reveal(move |i| s.borrow_mut().push(i));

    observer.emit("item-0", 1.0);

    assert_eq!(*seen.borrow(), vec![0, 1]);
    assert_eq!(tracker.revealed(), vec![0, 1]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed indices
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_malformed_index_skipped_by_default() {
    let observer = Rc::new(FakeObserver::new());
    let mut tracker = RevealTracker::new(observer.clone(), &RevealConfig::default());

    let subscribed = tracker.observe_all(vec![
        RevealTarget::indexed("item-0", 0),
        RevealTarget::new("broken", None),
        RevealTarget::new("garbage", Some("first".into())),
    ]);

    assert_eq!(subscribed, 1);
    assert_eq!(observer.observed_keys(), vec!["item-0".to_string()]);
    assert_eq!(observer.emit("broken", 1.0), 0);
    assert!(!tracker.is_revealed(0));
}

#[test]
fn test_malformed_index_aliases_to_zero_when_configured() {
    let observer = Rc::new(FakeObserver::new());
    let config = RevealConfig {
        malformed_index: MalformedIndexPolicy::AliasToZero,
        ..RevealConfig::default()
    };
    let mut tracker = RevealTracker::new(observer.clone(), &config);
    tracker.observe_all(vec![
        RevealTarget::indexed("item-0", 0),
        RevealTarget::new("broken", None),
    ]);

    observer.emit("broken", 1.0);
    // Aliased: the real item 0 now reads as revealed too
    assert!(tracker.is_revealed(0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Teardown
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_stop_releases_subscriptions_and_is_idempotent() {
    let observer = Rc::new(FakeObserver::new());
    let mut tracker = make_tracker(&observer, &[0, 1, 2]);
    assert_eq!(observer.active_subscriptions(), 3);

    tracker.stop();
    tracker.stop();

    assert_eq!(observer.active_subscriptions(), 0);
    assert!(!tracker.is_observing());
}

#[test]
fn test_revealed_state_survives_stop() {
    let observer = Rc::new(FakeObserver::new());
    let mut tracker = make_tracker(&observer, &[0, 1]);
    observer.emit("item-1", 1.0);

    tracker.stop();
    assert!(tracker.is_revealed(1));
    assert_eq!(tracker.observe_all(targets(&[5])), 0);
}

#[test]
fn test_drop_releases_subscriptions() {
    let observer = Rc::new(FakeObserver::new());
    {
        let _tracker = make_tracker(&observer, &[0, 1]);
        assert_eq!(observer.active_subscriptions(), 2);
    }
    assert_eq!(observer.active_subscriptions(), 0);
}

/// Observer that never honours `unobserve`, like a host that leaks its
/// intersection observer after the view is gone.
struct LeakyObserver(FakeObserver);

impl VisibilityObserver for LeakyObserver {
    fn observe(
        &self,
        target: &RevealTarget,
        threshold: f32,
        on_crossed: Box<dyn FnMut(f32)>,
    ) -> SubscriptionId {
        self.0.observe(target, threshold, on_crossed)
    }

    fn unobserve(&self, _id: SubscriptionId) {}
}

#[test]
fn test_notification_after_stop_does_not_mutate() {
    let observer = Rc::new(LeakyObserver(FakeObserver::new()));
    let mut tracker = RevealTracker::new(observer.clone(), &RevealConfig::default());
    tracker.observe_all(targets(&[0]));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    tracker.on_reveal(move |i| s.borrow_mut().push(i));

    tracker.stop();
    assert_eq!(observer.0.emit_all(1.0), 1);

    assert!(!tracker.is_revealed(0));
    assert!(seen.borrow().is_empty());
}
