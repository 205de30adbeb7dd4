use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{HeroController, Section};
use folio_types::EffectKind;

use super::{BattleScene, VfxOverlay};
use crate::use_folio;

#[component]
pub fn HeroSection() -> Element {
    let folio = use_folio();
    let content = folio.content.clone();
    let intensity = folio.config.vfx.intensity;
    let mut title_index = use_signal(|| 0usize);
    let mut vfx_active = use_signal(|| false);

    let hero = use_hook(move || {
        let hero = Rc::new(RefCell::new(HeroController::new(
            folio.scheduler.clone(),
            &folio.config,
            folio.content.hero_titles.len(),
            folio.seed(),
        )));

        let weak = Rc::downgrade(&hero);
        hero.borrow().on_pulse(move |_| {
            if let Some(hero) = weak.upgrade() {
                title_index.set(hero.borrow().title_index());
            }
        });
        hero.borrow().vfx().on_change(move |v| vfx_active.set(v));
        hero
    });
    use_drop(move || hero.borrow_mut().unmount());

    let title = content
        .hero_titles
        .get(title_index())
        .cloned()
        .unwrap_or_default();

    rsx! {
        div { class: "relative min-h-screen flex items-center justify-center overflow-hidden",
            div { class: "absolute inset-0 bg-gradient-to-br from-background via-muted to-secondary/20" }
            BattleScene {}
            VfxOverlay {
                kind: EffectKind::ChakraSurge,
                intensity,
                active: vfx_active(),
            }
            div { class: "relative z-10 text-center max-w-4xl mx-auto px-6",
                div { class: "mb-8 animate-ninja-slide",
                    p { class: "text-lg text-muted-foreground mb-2", "Welcome, traveler. I am" }
                    div { class: "w-20 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full" }
                }
                h1 { class: "text-6xl md:text-8xl font-bold mb-6",
                    span { class: "bg-gradient-to-r from-primary via-accent to-primary bg-clip-text text-transparent animate-fire-dance",
                        "{content.owner}"
                    }
                }
                div { class: "mb-8 h-16 flex items-center justify-center",
                    h2 { key: "{title_index}", class: "text-2xl md:text-3xl font-semibold text-primary typing-effect",
                        "{title}"
                    }
                }
                div { class: "flex flex-col sm:flex-row gap-6 justify-center items-center",
                    a { class: "jutsu-button px-8 py-4 text-lg font-semibold", href: "#projects",
                        "View Jutsu Scrolls"
                    }
                    a { class: "px-8 py-4 text-lg font-semibold border border-primary text-primary chakra-glow",
                        href: "#contact",
                        "Summon Me"
                    }
                }
            }
        }
    }
}
