//! One-shot delayed flag.
//!
//! Holds an initial value until its delay elapses, then flips once. Used for
//! the intro/loading screens, the tech-stack wheel spin and battle-scene
//! entrances.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::host::{Scheduler, TimerId};

type ChangeListener = Box<dyn FnMut(bool)>;

struct FlagState {
    value: bool,
    fired: bool,
    pending: Option<TimerId>,
    listeners: Vec<ChangeListener>,
}

struct Inner {
    scheduler: Rc<dyn Scheduler>,
    state: RefCell<FlagState>,
}

pub struct DelayedFlag {
    inner: Rc<Inner>,
}

impl DelayedFlag {
    /// Arm the flag: it reads `initial` until `delay_ms` has elapsed, then
    /// `!initial`. A zero delay still waits for the scheduler.
    pub fn new(scheduler: Rc<dyn Scheduler>, initial: bool, delay_ms: u64) -> Self {
        let inner = Rc::new(Inner {
            scheduler,
            state: RefCell::new(FlagState {
                value: initial,
                fired: false,
                pending: None,
                listeners: Vec::new(),
            }),
        });

        let weak = Rc::downgrade(&inner);
        let id = inner.scheduler.schedule(delay_ms, Box::new(move || flip(&weak)));
        inner.state.borrow_mut().pending = Some(id);

        Self { inner }
    }

    pub fn is_set(&self) -> bool {
        self.inner.state.borrow().value
    }

    pub fn has_fired(&self) -> bool {
        self.inner.state.borrow().fired
    }

    /// Whether the flip is still pending.
    pub fn is_pending(&self) -> bool {
        self.inner.state.borrow().pending.is_some()
    }

    /// Called with the new value when the flag flips.
    pub fn on_change(&self, listener: impl FnMut(bool) + 'static) {
        self.inner.state.borrow_mut().listeners.push(Box::new(listener));
    }

    /// Drop the pending flip, leaving the current value in place. Idempotent.
    pub fn cancel(&self) {
        let mut state = self.inner.state.borrow_mut();
        if let Some(id) = state.pending.take() {
            self.inner.scheduler.cancel(id);
        }
        state.listeners.clear();
    }
}

impl Drop for DelayedFlag {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn flip(inner: &Weak<Inner>) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    let (value, mut listeners) = {
        let mut state = inner.state.borrow_mut();
        if state.pending.take().is_none() || state.fired {
            return;
        }
        state.fired = true;
        state.value = !state.value;
        (state.value, std::mem::take(&mut state.listeners))
    };

    for listener in listeners.iter_mut() {
        listener(value);
    }
}
