use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{BattleController, Section};
use folio_types::{Intensity, StagePosition};

use super::VfxOverlay;
use crate::use_folio;

fn stage_class(position: StagePosition) -> &'static str {
    match position {
        StagePosition::Left => "left-8",
        StagePosition::Center => "left-1/2 -translate-x-1/2",
        StagePosition::Right => "right-8",
    }
}

/// Silhouettes behind the hero banner. Each one slides in after its entrance
/// delay and periodically flashes its signature jutsu.
#[component]
pub fn BattleScene() -> Element {
    let folio = use_folio();
    let roster = folio.config.battle.roster.clone();
    let mut entered = use_signal(|| vec![false; roster.len()]);
    let mut flashing = use_signal(|| vec![false; roster.len()]);

    let battle = use_hook(move || {
        let battle = BattleController::new(folio.scheduler.clone(), &folio.config.battle, folio.seed());
        for (i, c) in battle.characters().iter().enumerate() {
            c.entered().on_change(move |v| {
                if let Some(slot) = entered.write().get_mut(i) {
                    *slot = v;
                }
            });
            c.jutsu().on_change(move |v| {
                if let Some(slot) = flashing.write().get_mut(i) {
                    *slot = v;
                }
            });
        }
        Rc::new(RefCell::new(battle))
    });
    use_drop(move || battle.borrow_mut().unmount());

    rsx! {
        div { class: "absolute inset-0 overflow-hidden pointer-events-none",
            for (i, character) in roster.iter().enumerate() {
                {
                    let is_in = entered.read().get(i).copied().unwrap_or(false);
                    let is_flashing = flashing.read().get(i).copied().unwrap_or(false);
                    let motion = if is_in { "opacity-70 translate-y-0" } else { "opacity-0 translate-y-16" };
                    rsx! {
                        div {
                            key: "{i}",
                            class: "absolute bottom-0 transition-all duration-1000 {stage_class(character.position)} {character.size.css_class()} {motion}",
                            div { class: "w-full h-full bg-secondary/60 rounded-t-full ninja-silhouette" }
                            if is_flashing {
                                div { class: "absolute -top-8 left-1/2 -translate-x-1/2 text-3xl animate-chakra-pulse",
                                    "{character.jutsu.glyph()}"
                                }
                            }
                            VfxOverlay {
                                kind: character.jutsu.signature_effect(),
                                intensity: Intensity::Low,
                                active: is_flashing,
                            }
                        }
                    }
                }
            }
        }
    }
}
