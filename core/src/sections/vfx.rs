use std::rc::Rc;

use folio_types::{EffectKind, Intensity, VfxDefaults};

use crate::effects::EffectScheduler;
use crate::host::Scheduler;

use super::Section;

/// Externally triggered overlay: shown for `duration_ms` after each rising
/// edge of its trigger signal.
pub struct VfxController {
    effect: EffectScheduler,
    intensity: Intensity,
}

impl VfxController {
    pub fn new(scheduler: Rc<dyn Scheduler>, kind: EffectKind, defaults: &VfxDefaults) -> Self {
        Self {
            effect: EffectScheduler::new(scheduler, kind, defaults.duration_ms),
            intensity: defaults.intensity,
        }
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_duration(self, duration_ms: u64) -> Self {
        self.effect.set_duration(duration_ms);
        self
    }

    /// Feed the trigger signal; only a rising edge starts a window.
    pub fn set_trigger(&self, trigger: bool) {
        self.effect.set_trigger_signal(trigger);
    }

    pub fn is_active(&self) -> bool {
        self.effect.is_active()
    }

    pub fn kind(&self) -> EffectKind {
        self.effect.kind()
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn effect(&self) -> &EffectScheduler {
        &self.effect
    }

    pub fn on_change(&self, listener: impl FnMut(bool) + 'static) {
        self.effect.on_change(listener);
    }
}

impl Section for VfxController {
    fn unmount(&mut self) {
        self.effect.stop();
    }

    fn is_mounted(&self) -> bool {
        self.effect.is_mounted()
    }
}
