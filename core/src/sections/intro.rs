use std::rc::Rc;

use folio_types::IntroConfig;

use crate::delay::DelayedFlag;
use crate::host::Scheduler;

use super::Section;

/// Cinematic intro shown before the page: a loading phase, then the intro
/// card, then the page itself.
pub struct IntroController {
    loading: DelayedFlag,
    intro: DelayedFlag,
    mounted: bool,
}

impl IntroController {
    pub fn new(scheduler: Rc<dyn Scheduler>, config: &IntroConfig) -> Self {
        if config.intro_ms < config.loading_ms {
            tracing::warn!(
                loading_ms = config.loading_ms,
                intro_ms = config.intro_ms,
                "Intro ends before loading finishes"
            );
        }
        Self {
            loading: DelayedFlag::new(scheduler.clone(), true, config.loading_ms),
            intro: DelayedFlag::new(scheduler, true, config.intro_ms),
            mounted: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    pub fn show_intro(&self) -> bool {
        self.intro.is_set()
    }

    pub fn loading(&self) -> &DelayedFlag {
        &self.loading
    }

    pub fn intro(&self) -> &DelayedFlag {
        &self.intro
    }
}

impl Section for IntroController {
    fn unmount(&mut self) {
        self.loading.cancel();
        self.intro.cancel();
        self.mounted = false;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}
