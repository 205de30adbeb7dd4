use std::rc::Rc;

use folio_types::{BattleCharacter, BattleConfig};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::delay::DelayedFlag;
use crate::effects::EffectScheduler;
use crate::host::Scheduler;

use super::Section;

/// One battle-scene character: enters after its delay, then flashes its
/// jutsu on a jittered cadence.
pub struct CharacterController {
    character: BattleCharacter,
    entered: DelayedFlag,
    jutsu: EffectScheduler,
}

impl CharacterController {
    fn new(
        scheduler: Rc<dyn Scheduler>,
        character: BattleCharacter,
        config: &BattleConfig,
        seed: u64,
    ) -> Self {
        let entered = DelayedFlag::new(scheduler.clone(), false, character.entrance_delay_ms);
        let jutsu = EffectScheduler::new(
            scheduler,
            character.jutsu.signature_effect(),
            config.vfx.duration_ms,
        );
        jutsu.start_periodic(config.vfx, Box::new(SmallRng::seed_from_u64(seed)));

        Self {
            character,
            entered,
            jutsu,
        }
    }

    pub fn character(&self) -> &BattleCharacter {
        &self.character
    }

    pub fn has_entered(&self) -> bool {
        self.entered.is_set()
    }

    pub fn entered(&self) -> &DelayedFlag {
        &self.entered
    }

    pub fn show_jutsu(&self) -> bool {
        self.jutsu.is_active()
    }

    pub fn jutsu(&self) -> &EffectScheduler {
        &self.jutsu
    }
}

/// The hero's battle scene: one controller per roster entry.
pub struct BattleController {
    characters: Vec<CharacterController>,
    mounted: bool,
}

impl BattleController {
    /// Each character gets its own jitter stream derived from `seed`.
    pub fn new(scheduler: Rc<dyn Scheduler>, config: &BattleConfig, seed: u64) -> Self {
        let characters = config
            .roster
            .iter()
            .enumerate()
            .map(|(i, character)| {
                CharacterController::new(
                    scheduler.clone(),
                    *character,
                    config,
                    seed.wrapping_add(i as u64),
                )
            })
            .collect();

        Self {
            characters,
            mounted: true,
        }
    }

    pub fn characters(&self) -> &[CharacterController] {
        &self.characters
    }
}

impl Section for BattleController {
    fn unmount(&mut self) {
        for c in &self.characters {
            c.entered.cancel();
            c.jutsu.stop();
        }
        self.mounted = false;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}
