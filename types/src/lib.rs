//! Shared types for the shinobi folio.
//!
//! Holds the consolidated timing configuration, the effect vocabulary and
//! the static content tables. Used by both `folio-core` (timing) and
//! `folio-app` (rendering).

pub mod config;
pub mod content;
pub mod effect;

pub use config::{
    BattleConfig, ConfigError, ConfigWarning, FolioConfig, IntroConfig, MalformedIndexPolicy,
    PeriodicEffectConfig, RevealConfig, TechStackConfig, VfxDefaults,
};
pub use content::{
    Certification, ContactLink, Content, Difficulty, Project, TimelineEvent, Weapon,
};
pub use effect::{BattleCharacter, EffectKind, FigureSize, Intensity, JutsuType, StagePosition};
