//! Browser implementations of the core host capabilities.
//!
//! Timers are Dioxus tasks awaiting a `TimeoutFuture`; visibility comes from
//! one `IntersectionObserver` per target. JS callbacks never touch component
//! state directly: crossings are forwarded over a channel into a task so
//! listeners always run inside the Dioxus runtime.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use folio_core::{RevealTarget, Scheduler, SubscriptionId, TimerId, VisibilityObserver};
use gloo_timers::future::TimeoutFuture;
use tokio::sync::mpsc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use web_time::Instant;

// ─────────────────────────────────────────────────────────────────────────────
// Timers
// ─────────────────────────────────────────────────────────────────────────────

pub struct BrowserScheduler {
    origin: Instant,
    next_id: Cell<u64>,
    tasks: Rc<RefCell<HashMap<u64, Task>>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            next_id: Cell::new(0),
            tasks: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl Default for BrowserScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn schedule(&self, delay_ms: u64, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let millis = u32::try_from(delay_ms).unwrap_or(u32::MAX);
        let tasks = Rc::downgrade(&self.tasks);
        let task = spawn(async move {
            TimeoutFuture::new(millis).await;
            if let Some(tasks) = tasks.upgrade() {
                tasks.borrow_mut().remove(&id);
            }
            callback();
        });

        self.tasks.borrow_mut().insert(id, task);
        TimerId(id)
    }

    fn cancel(&self, id: TimerId) {
        if let Some(task) = self.tasks.borrow_mut().remove(&id.0) {
            task.cancel();
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Visibility
// ─────────────────────────────────────────────────────────────────────────────

struct Subscription {
    observer: IntersectionObserver,
    _on_entries: Closure<dyn FnMut(js_sys::Array)>,
    pump: Task,
}

#[derive(Default)]
pub struct BrowserObserver {
    next_id: Cell<u64>,
    subscriptions: RefCell<HashMap<u64, Subscription>>,
}

impl BrowserObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn subscribe(
        &self,
        target: &RevealTarget,
        threshold: f32,
        mut on_crossed: Box<dyn FnMut(f32)>,
    ) -> Option<Subscription> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&target.key))?;

        let (tx, mut rx) = mpsc::unbounded_channel::<f32>();
        let on_entries = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                // The ratio reported at the crossing can round just below the threshold
                let fraction = if entry.is_intersecting() {
                    (entry.intersection_ratio() as f32).max(threshold)
                } else {
                    0.0
                };
                let _ = tx.send(fraction);
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.into()));
        let observer =
            match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    tracing::warn!(key = %target.key, error = ?e, "IntersectionObserver unavailable");
                    return None;
                }
            };
        observer.observe(&element);

        let pump = spawn(async move {
            while let Some(fraction) = rx.recv().await {
                on_crossed(fraction);
            }
        });

        Some(Subscription {
            observer,
            _on_entries: on_entries,
            pump,
        })
    }
}

impl VisibilityObserver for BrowserObserver {
    fn observe(
        &self,
        target: &RevealTarget,
        threshold: f32,
        on_crossed: Box<dyn FnMut(f32)>,
    ) -> SubscriptionId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        match self.subscribe(target, threshold, on_crossed) {
            Some(sub) => {
                self.subscriptions.borrow_mut().insert(id, sub);
            }
            None => tracing::warn!(key = %target.key, "Reveal target not in document"),
        }
        SubscriptionId(id)
    }

    fn unobserve(&self, id: SubscriptionId) {
        if let Some(sub) = self.subscriptions.borrow_mut().remove(&id.0) {
            sub.observer.disconnect();
            sub.pump.cancel();
        }
    }
}

/// Every element tagged `data-reveal="{group}"`, keyed by its DOM id.
pub fn dom_targets(group: &str) -> Vec<RevealTarget> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(&format!("[data-reveal='{group}']")) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|el| RevealTarget::new(el.id(), el.get_attribute("data-index")))
        .collect()
}
