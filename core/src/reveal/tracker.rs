//! Reveal tracker
//!
//! Subscribes each target to the host's visibility observer and records the
//! target's index the first time a crossing reaches the threshold. The
//! revealed set is append-only for the lifetime of the tracker.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::{Rc, Weak};

use folio_types::{MalformedIndexPolicy, RevealConfig};

use crate::host::{RevealTarget, SubscriptionId, VisibilityObserver};

use super::parse_index;

type RevealListener = Box<dyn FnMut(u32)>;

struct RevealState {
    revealed: HashSet<u32>,
    /// Cleared by `stop()`; late notifications are dropped once false.
    mounted: bool,
    listeners: Vec<RevealListener>,
    /// Set while listeners run; reveals raised by a listener queue up.
    notifying: bool,
    queued: VecDeque<u32>,
}

/// One-way hidden→revealed tracker for a set of indexed targets.
pub struct RevealTracker {
    observer: Rc<dyn VisibilityObserver>,
    state: Rc<RefCell<RevealState>>,
    subscriptions: Vec<SubscriptionId>,
    threshold: f32,
    policy: MalformedIndexPolicy,
}

impl RevealTracker {
    pub fn new(observer: Rc<dyn VisibilityObserver>, config: &RevealConfig) -> Self {
        Self {
            observer,
            state: Rc::new(RefCell::new(RevealState {
                revealed: HashSet::new(),
                mounted: true,
                listeners: Vec::new(),
                notifying: false,
                queued: VecDeque::new(),
            })),
            subscriptions: Vec::new(),
            threshold: config.effective_threshold(),
            policy: config.malformed_index,
        }
    }

    /// Begin observing every target. Targets whose index cannot be resolved
    /// under the configured policy are skipped. Returns how many targets
    /// were subscribed.
    pub fn observe_all<I>(&mut self, targets: I) -> usize
    where
        I: IntoIterator<Item = RevealTarget>,
    {
        if !self.state.borrow().mounted {
            tracing::debug!("observe_all on a stopped reveal tracker ignored");
            return 0;
        }

        let mut subscribed = 0;
        for target in targets {
            let Some(index) = parse_index(target.index_attr.as_deref(), self.policy) else {
                tracing::warn!(
                    key = %target.key,
                    attr = ?target.index_attr,
                    "Reveal target has no usable index, skipping"
                );
                continue;
            };

            let weak = Rc::downgrade(&self.state);
            let threshold = self.threshold;
            let id = self.observer.observe(
                &target,
                threshold,
                Box::new(move |fraction| record_crossing(&weak, index, fraction, threshold)),
            );
            self.subscriptions.push(id);
            subscribed += 1;
        }

        tracing::debug!(
            subscribed,
            total = self.subscriptions.len(),
            threshold = self.threshold,
            "Reveal targets observed"
        );
        subscribed
    }

    /// Whether `index` has crossed the threshold at least once.
    pub fn is_revealed(&self, index: u32) -> bool {
        self.state.borrow().revealed.contains(&index)
    }

    pub fn revealed_count(&self) -> usize {
        self.state.borrow().revealed.len()
    }

    /// Revealed indices in ascending order.
    pub fn revealed(&self) -> Vec<u32> {
        let mut indices: Vec<u32> = self.state.borrow().revealed.iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Register a listener called once for every newly revealed index.
    pub fn on_reveal(&self, listener: impl FnMut(u32) + 'static) {
        self.state.borrow_mut().listeners.push(Box::new(listener));
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_observing(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// True once `stop()` has run.
    pub fn is_stopped(&self) -> bool {
        !self.state.borrow().mounted
    }

    /// Release every subscription. Safe to call repeatedly; the revealed set
    /// is kept so a torn-down view still answers queries consistently.
    pub fn stop(&mut self) {
        {
            let mut state = self.state.borrow_mut();
            if !state.mounted && self.subscriptions.is_empty() {
                return;
            }
            state.mounted = false;
            state.listeners.clear();
            state.queued.clear();
        }

        let released = self.subscriptions.len();
        for id in self.subscriptions.drain(..) {
            self.observer.unobserve(id);
        }
        tracing::debug!(released, "Reveal tracker stopped");
    }
}

impl Drop for RevealTracker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Handle one visibility notification. Idempotent per index.
///
/// A zero fraction means the target is not intersecting at all, so it never
/// reveals, even under a zero threshold.
fn record_crossing(state: &Weak<RefCell<RevealState>>, index: u32, fraction: f32, threshold: f32) {
    let Some(state) = state.upgrade() else {
        return;
    };

    let mut listeners = {
        let mut guard = state.borrow_mut();
        if !guard.mounted {
            tracing::trace!(index, "Crossing after stop ignored");
            return;
        }
        if !(fraction > 0.0 && fraction >= threshold) {
            tracing::trace!(index, fraction, threshold, "Not visible enough");
            return;
        }
        if !guard.revealed.insert(index) {
            return;
        }
        tracing::debug!(index, fraction, "Revealed");
        guard.queued.push_back(index);
        if guard.notifying {
            return;
        }
        guard.notifying = true;
        std::mem::take(&mut guard.listeners)
    };

    // Listeners run without the borrow held so they can query the tracker
    loop {
        let next = state.borrow_mut().queued.pop_front();
        let Some(index) = next else {
            break;
        };
        for listener in listeners.iter_mut() {
            listener(index);
        }
    }

    let mut guard = state.borrow_mut();
    guard.notifying = false;
    if guard.mounted {
        listeners.append(&mut guard.listeners);
        guard.listeners = listeners;
    }
}
