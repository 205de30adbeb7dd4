//! Timing and visibility mechanisms behind the portfolio page.
//!
//! Everything here is host-agnostic: time comes from a [`host::Scheduler`]
//! and visibility from a [`host::VisibilityObserver`], so the same
//! controllers run in the browser and under the manual clock in tests.

pub mod delay;
pub mod effects;
pub mod host;
pub mod reveal;
pub mod sections;

#[cfg(test)]
pub mod testing;

pub use delay::DelayedFlag;
pub use effects::{EffectInstance, EffectPhase, EffectScheduler};
pub use host::{
    JitterSource, NoJitter, RevealTarget, Scheduler, SubscriptionId, TimerId, VisibilityObserver,
};
pub use reveal::{RevealTracker, parse_index};
pub use sections::{
    BattleController, CharacterController, HeroController, IntroController, Presentation,
    ProjectsController, RevealSection, Section, TechStackController, VfxController,
};
