use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Section, TechStackController};
use folio_types::EffectKind;

use super::VfxOverlay;
use crate::use_folio;

/// Weapons pouch: a wheel of tools that spins on mount, with a periodic
/// lightning storm over it.
#[component]
pub fn TechStackSection() -> Element {
    let folio = use_folio();
    let weapons = folio.content.weapons.clone();
    let intensity = folio.config.vfx.intensity;
    let mut spinning = use_signal(|| true);
    let mut lightning = use_signal(|| false);
    let mut storm = use_signal(|| false);
    let mut hovered = use_signal(|| None::<usize>);

    let tech = use_hook(move || {
        let tech = TechStackController::new(folio.scheduler.clone(), &folio.config, folio.seed());
        tech.spinning().on_change(move |v| spinning.set(v));
        tech.lightning().on_change(move |v| lightning.set(v));
        tech.vfx().on_change(move |v| storm.set(v));
        Rc::new(RefCell::new(tech))
    });

    let hover = use_callback({
        let tech = tech.clone();
        move |index: Option<usize>| {
            tech.borrow_mut().set_hovered(index);
            hovered.set(index);
        }
    });
    use_drop(move || tech.borrow_mut().unmount());

    let count = weapons.len().max(1);
    let wheel = if spinning() { "animate-spin-slow" } else { "" };

    rsx! {
        div { class: "py-20 px-6 relative overflow-hidden",
            VfxOverlay { kind: EffectKind::LightningStorm, intensity, active: storm() }
            if lightning() {
                div { class: "absolute inset-0 bg-accent/10 animate-pulse pointer-events-none" }
            }
            div { class: "max-w-6xl mx-auto text-center mb-16",
                h2 { class: "text-4xl md:text-5xl font-bold mb-6",
                    span { class: "text-foreground", "Weapons Pouch: " }
                    span { class: "bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent",
                        "Tech Arsenal"
                    }
                }
            }
            div { class: "max-w-4xl mx-auto relative",
                div { class: "relative w-80 h-80 mx-auto mb-16 {wheel}",
                    div { class: "absolute inset-0 flex items-center justify-center",
                        div { class: "w-32 h-32 bg-gradient-to-br from-secondary to-secondary/50 rounded-full border-4 border-primary flex items-center justify-center text-4xl animate-chakra-pulse",
                            "🌀"
                        }
                    }
                    for (i, weapon) in weapons.iter().enumerate() {
                        {
                            let angle = i * 360 / count;
                            let lifted = if hovered() == Some(i) { "scale-125 z-20" } else { "" };
                            rsx! {
                                div {
                                    key: "{i}",
                                    class: "absolute w-16 h-16 top-1/2 left-1/2 transition-all duration-500 cursor-pointer {lifted}",
                                    style: "transform: rotate({angle}deg) translate(140px) rotate(-{angle}deg)",
                                    onmouseenter: move |_| hover.call(Some(i)),
                                    onmouseleave: move |_| hover.call(None),
                                    div { class: "w-full h-full bg-card border-2 border-primary rounded-full flex items-center justify-center text-2xl chakra-glow",
                                        "{weapon.icon}"
                                    }
                                    if hovered() == Some(i) {
                                        div { class: "absolute top-full left-1/2 -translate-x-1/2 mt-4 w-64 p-4 bg-card border border-primary rounded-lg shadow-lg z-30",
                                            h4 { class: "font-bold text-primary mb-1", "{weapon.name}" }
                                            p { class: "text-xs text-accent mb-2", "{weapon.category}" }
                                            p { class: "text-sm text-muted-foreground mb-3", "{weapon.description}" }
                                            div { class: "w-full bg-muted rounded-full h-2",
                                                div {
                                                    class: "bg-gradient-to-r from-primary to-accent rounded-full h-2",
                                                    style: "width: {weapon.proficiency_fraction() * 100.0}%",
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "grid md:grid-cols-2 lg:grid-cols-4 gap-6 mt-16",
                    for (i, weapon) in weapons.iter().enumerate() {
                        div { key: "{i}", class: "p-6 text-center bg-card rounded-lg chakra-glow",
                            div { class: "text-3xl mb-3", "{weapon.icon}" }
                            h3 { class: "font-bold text-foreground mb-2", "{weapon.name}" }
                            p { class: "text-sm text-accent mb-3", "{weapon.category}" }
                            span { class: "text-xs font-bold text-primary", "{weapon.proficiency}%" }
                        }
                    }
                }
            }
        }
    }
}
