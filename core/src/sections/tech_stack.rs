use std::rc::Rc;

use folio_types::{EffectKind, FolioConfig};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::delay::DelayedFlag;
use crate::effects::EffectScheduler;
use crate::host::Scheduler;

use super::{Section, VfxController};

/// Tech-stack wheel: spins for a while after mount, then a lightning storm
/// flashes on a fixed cadence.
pub struct TechStackController {
    spinning: DelayedFlag,
    lightning: EffectScheduler,
    vfx: Rc<VfxController>,
    hovered: Option<usize>,
}

impl TechStackController {
    pub fn new(scheduler: Rc<dyn Scheduler>, config: &FolioConfig, seed: u64) -> Self {
        let tech = &config.tech_stack;
        let spinning = DelayedFlag::new(scheduler.clone(), true, tech.spin_duration_ms);
        let lightning = EffectScheduler::new(
            scheduler.clone(),
            EffectKind::LightningStorm,
            tech.lightning.duration_ms,
        );
        let vfx = Rc::new(VfxController::new(
            scheduler,
            EffectKind::LightningStorm,
            &config.vfx,
        ));

        let weak = Rc::downgrade(&vfx);
        lightning.on_change(move |active| {
            if let Some(vfx) = weak.upgrade() {
                vfx.set_trigger(active);
            }
        });
        lightning.start_periodic(tech.lightning, Box::new(SmallRng::seed_from_u64(seed)));

        Self {
            spinning,
            lightning,
            vfx,
            hovered: None,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning.is_set()
    }

    pub fn spinning(&self) -> &DelayedFlag {
        &self.spinning
    }

    pub fn show_lightning(&self) -> bool {
        self.lightning.is_active()
    }

    pub fn lightning(&self) -> &EffectScheduler {
        &self.lightning
    }

    pub fn vfx(&self) -> &VfxController {
        &self.vfx
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }
}

impl Section for TechStackController {
    fn unmount(&mut self) {
        self.spinning.cancel();
        self.lightning.stop();
        self.vfx.effect().stop();
    }

    fn is_mounted(&self) -> bool {
        self.lightning.is_mounted()
    }
}
