//! Transient effect scheduling
//!
//! This module provides:
//! - **EffectInstance**: runtime state of the one effect a scheduler owns
//! - **EffectScheduler**: Idle/Active state machine driven by trigger edges
//!   or a (jittered) periodic cadence
//!
//! # Lifecycle
//!
//! ```text
//!              trigger edge / interval elapsed
//!   ┌──────┐ ───────────────────────────────▶ ┌────────┐ ──┐ re-trigger:
//!   │ Idle │                                  │ Active │   │ cancel pending
//!   └──────┘ ◀─────────────────────────────── └────────┘ ◀─┘ deactivation, re-arm
//!                   duration elapsed
//! ```
//!
//! Each activation bumps a generation counter. A deactivation timer only
//! applies if its generation is still current, so a stale timer from an
//! earlier trigger can never cut a later window short.

mod instance;
pub mod scheduler;


pub use instance::{EffectInstance, EffectPhase};
pub use scheduler::EffectScheduler;
