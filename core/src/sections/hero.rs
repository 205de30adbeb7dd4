use std::rc::Rc;

use folio_types::{EffectKind, FolioConfig};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::effects::EffectScheduler;
use crate::host::Scheduler;

use super::{Section, VfxController};

/// Hero banner: every hero period the title rotates and a short pulse
/// fires, whose rising edge triggers the chakra-surge overlay.
pub struct HeroController {
    pulse: EffectScheduler,
    vfx: Rc<VfxController>,
    title_count: usize,
}

impl HeroController {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        config: &FolioConfig,
        title_count: usize,
        seed: u64,
    ) -> Self {
        let pulse = EffectScheduler::new(
            scheduler.clone(),
            EffectKind::ChakraSurge,
            config.hero.duration_ms,
        );
        let vfx = Rc::new(VfxController::new(scheduler, EffectKind::ChakraSurge, &config.vfx));

        let weak = Rc::downgrade(&vfx);
        pulse.on_change(move |active| {
            if let Some(vfx) = weak.upgrade() {
                vfx.set_trigger(active);
            }
        });
        pulse.start_periodic(config.hero, Box::new(SmallRng::seed_from_u64(seed)));

        Self {
            pulse,
            vfx,
            title_count,
        }
    }

    /// Index of the title currently shown; advances on every pulse.
    pub fn title_index(&self) -> usize {
        if self.title_count == 0 {
            return 0;
        }
        (self.pulse.activation_count() % self.title_count as u64) as usize
    }

    pub fn pulse(&self) -> &EffectScheduler {
        &self.pulse
    }

    pub fn vfx(&self) -> &VfxController {
        &self.vfx
    }

    /// Notified on every pulse transition (the title changes on `true`).
    pub fn on_pulse(&self, listener: impl FnMut(bool) + 'static) {
        self.pulse.on_change(listener);
    }
}

impl Section for HeroController {
    fn unmount(&mut self) {
        self.pulse.stop();
        self.vfx.effect().stop();
    }

    fn is_mounted(&self) -> bool {
        self.pulse.is_mounted()
    }
}
