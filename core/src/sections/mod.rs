//! Section controllers
//!
//! Each page section owns one controller, created when the section mounts
//! and torn down when it unmounts. Controllers compose the reveal tracker,
//! the effect scheduler and delayed flags using the timings in
//! [`folio_types::FolioConfig`].

mod battle;
mod hero;
mod intro;
mod projects;
mod reveal_section;
mod tech_stack;
mod vfx;


pub use battle::{BattleController, CharacterController};
pub use hero::HeroController;
pub use intro::IntroController;
pub use projects::ProjectsController;
pub use reveal_section::{Presentation, RevealSection};
pub use tech_stack::TechStackController;
pub use vfx::VfxController;

/// Teardown contract shared by every controller.
pub trait Section {
    /// Cancel every timer and release every subscription the section owns.
    /// Safe to call more than once; state is frozen afterwards.
    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;
}
