//! Scroll reveal tracking
//!
//! Content blocks start hidden and are marked revealed the first time
//! enough of them scrolls into view. A revealed block never hides again.
//!
//! ```text
//! ┌──────────────────────────┐   observe(target, 0.3)   ┌────────────────────┐
//! │      RevealTracker       │ ───────────────────────▶ │ VisibilityObserver │
//! │  revealed: {1, 4, ...}   │ ◀─────────────────────── │  (browser / fake)  │
//! └──────────────────────────┘   on_crossed(fraction)   └────────────────────┘
//!              │
//!       is_revealed(i)
//!              ▼
//!        View renders "revealed" or "hidden" styling
//! ```

mod index;
pub mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use index::parse_index;
pub use tracker::RevealTracker;
