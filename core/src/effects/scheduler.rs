//! Transient effect scheduler
//!
//! Holds a boolean "effect active" flag on for a fixed window. Two drivers:
//! - **Trigger mode**: [`EffectScheduler::trigger`] or a false→true edge on
//!   [`EffectScheduler::set_trigger_signal`]
//! - **Periodic mode**: [`EffectScheduler::start_periodic`] activates every
//!   `interval + jitter` milliseconds
//!
//! Re-triggering while active restarts the countdown from the current
//! moment (debounce-to-latest, windows never stack). A transition raised by a
//! listener is delivered after the current one reaches every listener.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use folio_types::{EffectKind, PeriodicEffectConfig};

use crate::host::{JitterSource, Scheduler, TimerId};

use super::{EffectInstance, EffectPhase};

type ChangeListener = Box<dyn FnMut(bool)>;

struct Cadence {
    config: PeriodicEffectConfig,
    jitter: Box<dyn JitterSource>,
}

struct EffectState {
    instance: EffectInstance,
    /// Bumped on every activation; deactivation timers carry the value they
    /// were armed with.
    generation: u64,
    /// Bumped whenever the periodic cadence is started or stopped.
    cadence_epoch: u64,
    pending_off: Option<TimerId>,
    pending_tick: Option<TimerId>,
    cadence: Option<Cadence>,
    last_signal: bool,
    activations: u64,
    mounted: bool,
    listeners: Vec<ChangeListener>,
    /// Set while listeners run; transitions raised by a listener queue up.
    notifying: bool,
    queued: VecDeque<bool>,
}

struct Inner {
    scheduler: Rc<dyn Scheduler>,
    state: RefCell<EffectState>,
}

/// Idle/Active state machine for one cosmetic effect.
pub struct EffectScheduler {
    inner: Rc<Inner>,
}

impl EffectScheduler {
    pub fn new(scheduler: Rc<dyn Scheduler>, kind: EffectKind, duration_ms: u64) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                state: RefCell::new(EffectState {
                    instance: EffectInstance::new(kind, duration_ms),
                    generation: 0,
                    cadence_epoch: 0,
                    pending_off: None,
                    pending_tick: None,
                    cadence: None,
                    last_signal: false,
                    activations: 0,
                    mounted: true,
                    listeners: Vec::new(),
                    notifying: false,
                    queued: VecDeque::new(),
                }),
            }),
        }
    }

    /// Activate now, or restart the window if already active.
    pub fn trigger(&self) {
        activate(&self.inner);
    }

    /// Feed the external trigger signal. Only a false→true edge activates;
    /// a falling edge leaves the current window to run out on its own.
    pub fn set_trigger_signal(&self, signal: bool) {
        let rising = {
            let mut state = self.inner.state.borrow_mut();
            let rising = signal && !state.last_signal;
            state.last_signal = signal;
            rising
        };
        if rising {
            activate(&self.inner);
        }
    }

    /// Change the display window for future activations.
    pub fn set_duration(&self, duration_ms: u64) {
        self.inner.state.borrow_mut().instance.duration_ms = duration_ms;
    }

    /// Start (or restart) the self-driven cadence. The display duration is
    /// taken from `config`; jitter is redrawn for every period.
    pub fn start_periodic(&self, config: PeriodicEffectConfig, jitter: Box<dyn JitterSource>) {
        {
            let mut state = self.inner.state.borrow_mut();
            if !state.mounted {
                return;
            }
            if config.interval_ms == 0 {
                tracing::warn!(kind = %state.instance.kind, "Periodic effect with zero interval not started");
                return;
            }
            if let Some(id) = state.pending_tick.take() {
                self.inner.scheduler.cancel(id);
            }
            state.cadence_epoch += 1;
            state.instance.duration_ms = config.duration_ms;
            state.cadence = Some(Cadence { config, jitter });
            tracing::debug!(
                kind = %state.instance.kind,
                interval_ms = config.interval_ms,
                jitter_ms = config.jitter_ms,
                duration_ms = config.duration_ms,
                "Periodic effect started"
            );
        }
        schedule_tick(&self.inner);
    }

    /// Stop the cadence. An open window still closes on schedule.
    pub fn stop_periodic(&self) {
        let mut state = self.inner.state.borrow_mut();
        if let Some(id) = state.pending_tick.take() {
            self.inner.scheduler.cancel(id);
        }
        state.cadence_epoch += 1;
        state.cadence = None;
    }

    /// Register a listener called with the new flag on every Idle↔Active
    /// transition. Restarting an open window does not notify.
    pub fn on_change(&self, listener: impl FnMut(bool) + 'static) {
        self.inner.state.borrow_mut().listeners.push(Box::new(listener));
    }

    pub fn is_active(&self) -> bool {
        self.inner.state.borrow().instance.active
    }

    pub fn phase(&self) -> EffectPhase {
        self.inner.state.borrow().instance.phase()
    }

    pub fn instance(&self) -> EffectInstance {
        self.inner.state.borrow().instance
    }

    pub fn kind(&self) -> EffectKind {
        self.inner.state.borrow().instance.kind
    }

    /// Activations so far, re-triggers included.
    pub fn activation_count(&self) -> u64 {
        self.inner.state.borrow().activations
    }

    pub fn is_periodic(&self) -> bool {
        self.inner.state.borrow().cadence.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.state.borrow().mounted
    }

    /// Cancel every pending transition and freeze the state. Idempotent.
    pub fn stop(&self) {
        let mut state = self.inner.state.borrow_mut();
        if !state.mounted {
            return;
        }
        state.mounted = false;
        if let Some(id) = state.pending_off.take() {
            self.inner.scheduler.cancel(id);
        }
        if let Some(id) = state.pending_tick.take() {
            self.inner.scheduler.cancel(id);
        }
        state.cadence = None;
        state.listeners.clear();
        state.queued.clear();
        tracing::debug!(kind = %state.instance.kind, "Effect scheduler stopped");
    }
}

impl Drop for EffectScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transitions
// ─────────────────────────────────────────────────────────────────────────────

fn activate(inner: &Rc<Inner>) {
    let became_active = {
        let mut state = inner.state.borrow_mut();
        if !state.mounted {
            return;
        }
        if let Some(id) = state.pending_off.take() {
            inner.scheduler.cancel(id);
        }

        state.generation += 1;
        state.activations += 1;
        let generation = state.generation;
        let was_active = state.instance.active;
        state.instance.active = true;
        state.instance.started_at_ms = inner.scheduler.now_ms();

        let weak = Rc::downgrade(inner);
        let id = inner.scheduler.schedule(
            state.instance.duration_ms,
            Box::new(move || deactivate(&weak, generation)),
        );
        state.pending_off = Some(id);

        tracing::debug!(
            kind = %state.instance.kind,
            generation,
            restarted = was_active,
            at_ms = state.instance.started_at_ms,
            "Effect activated"
        );
        !was_active
    };

    if became_active {
        notify(inner, true);
    }
}

fn deactivate(inner: &Weak<Inner>, generation: u64) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    {
        let mut state = inner.state.borrow_mut();
        if !state.mounted || state.generation != generation || !state.instance.active {
            tracing::trace!(generation, current = state.generation, "Stale deactivation ignored");
            return;
        }
        state.pending_off = None;
        state.instance.active = false;
        tracing::debug!(kind = %state.instance.kind, generation, "Effect deactivated");
    }

    notify(&inner, false);
}

fn schedule_tick(inner: &Rc<Inner>) {
    let mut state = inner.state.borrow_mut();
    if !state.mounted {
        return;
    }
    let epoch = state.cadence_epoch;
    let Some(cadence) = state.cadence.as_mut() else {
        return;
    };

    let jitter = if cadence.config.jitter_ms > 0 {
        cadence.jitter.jitter_ms(cadence.config.jitter_ms)
    } else {
        0
    };
    let delay = cadence.config.interval_ms + jitter;

    let weak = Rc::downgrade(inner);
    let id = inner
        .scheduler
        .schedule(delay, Box::new(move || tick(&weak, epoch)));
    state.pending_tick = Some(id);
}

fn tick(inner: &Weak<Inner>, epoch: u64) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    {
        let mut state = inner.state.borrow_mut();
        if !state.mounted || state.cadence_epoch != epoch || state.cadence.is_none() {
            return;
        }
        state.pending_tick = None;
    }

    activate(&inner);
    schedule_tick(&inner);
}

/// Run listeners without holding the state borrow so they may query or
/// re-trigger the scheduler. Transitions raised from inside a listener are
/// delivered in order once the current one has reached every listener.
fn notify(inner: &Rc<Inner>, active: bool) {
    let mut listeners = {
        let mut state = inner.state.borrow_mut();
        state.queued.push_back(active);
        if state.notifying {
            return;
        }
        state.notifying = true;
        std::mem::take(&mut state.listeners)
    };

    loop {
        let next = inner.state.borrow_mut().queued.pop_front();
        let Some(active) = next else {
            break;
        };
        for listener in listeners.iter_mut() {
            listener(active);
        }
    }

    let mut state = inner.state.borrow_mut();
    state.notifying = false;
    if state.mounted {
        listeners.append(&mut state.listeners);
        state.listeners = listeners;
    }
}
