use std::rc::Rc;

use folio_types::RevealConfig;

use crate::host::{RevealTarget, VisibilityObserver};
use crate::reveal::RevealTracker;

use super::Section;

/// Presentation state of one item in a reveal section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Hidden,
    Revealed,
}

impl Presentation {
    pub fn css_class(self) -> &'static str {
        match self {
            Presentation::Hidden => "opacity-0 translate-y-10",
            Presentation::Revealed => "opacity-100 translate-y-0",
        }
    }
}

/// A list section (story timeline, certifications) whose items fade in as
/// they scroll into view.
pub struct RevealSection {
    tracker: RevealTracker,
    key_prefix: String,
    len: usize,
}

impl RevealSection {
    pub fn new(
        observer: Rc<dyn VisibilityObserver>,
        config: &RevealConfig,
        key_prefix: impl Into<String>,
        len: usize,
    ) -> Self {
        Self {
            tracker: RevealTracker::new(observer, config),
            key_prefix: key_prefix.into(),
            len,
        }
    }

    /// Element key for item `index`, `"{prefix}-{index}"`.
    pub fn key_for(&self, index: usize) -> String {
        format!("{}-{}", self.key_prefix, index)
    }

    /// One well-formed target per item.
    pub fn targets(&self) -> Vec<RevealTarget> {
        (0..self.len)
            .map(|i| RevealTarget::indexed(self.key_for(i), i as u32))
            .collect()
    }

    /// Observe the section's own items.
    pub fn mount(&mut self) -> usize {
        let targets = self.targets();
        self.tracker.observe_all(targets)
    }

    /// Observe targets discovered by the host (e.g. queried from the DOM).
    pub fn mount_targets(&mut self, targets: Vec<RevealTarget>) -> usize {
        self.tracker.observe_all(targets)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        u32::try_from(index).is_ok_and(|i| self.tracker.is_revealed(i))
    }

    pub fn presentation(&self, index: usize) -> Presentation {
        if self.is_revealed(index) {
            Presentation::Revealed
        } else {
            Presentation::Hidden
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn tracker(&self) -> &RevealTracker {
        &self.tracker
    }

    pub fn on_reveal(&self, listener: impl FnMut(u32) + 'static) {
        self.tracker.on_reveal(listener);
    }
}

impl Section for RevealSection {
    fn unmount(&mut self) {
        self.tracker.stop();
    }

    fn is_mounted(&self) -> bool {
        !self.tracker.is_stopped()
    }
}
