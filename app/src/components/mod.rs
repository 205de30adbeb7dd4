//! Page sections
//!
//! Each section owns its controller from `folio_core` for the lifetime of
//! the component and tears it down in `use_drop`.

pub mod battle;
pub mod certifications;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod intro;
pub mod projects;
pub mod reveal;
pub mod story;
pub mod tech_stack;
pub mod vfx;

pub use battle::BattleScene;
pub use certifications::CertificationsSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use intro::IntroScreen;
pub use projects::ProjectsSection;
pub use reveal::use_reveal;
pub use story::StorySection;
pub use tech_stack::TechStackSection;
pub use vfx::VfxOverlay;
