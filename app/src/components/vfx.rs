use dioxus::prelude::*;
use folio_types::{EffectKind, Intensity};

/// Full-bleed particle overlay. Visibility is owned by the parent's
/// `VfxController`; this only renders.
#[component]
pub fn VfxOverlay(kind: EffectKind, intensity: Intensity, active: bool) -> Element {
    if !active {
        return rsx! {};
    }

    let particles = match kind {
        EffectKind::Explosion => 24,
        EffectKind::ChakraSurge => 30,
        EffectKind::LightningStorm => 8,
        EffectKind::FireTornado => 20,
        EffectKind::IceShards => 16,
    };

    rsx! {
        div { class: "pointer-events-none absolute inset-0 z-20 vfx-{kind} {intensity.css_class()}",
            for i in 0..particles {
                div {
                    key: "{i}",
                    class: "absolute vfx-particle vfx-particle-{kind}",
                    style: "left: {(i * 37) % 100}%; top: {(i * 53) % 100}%; animation-delay: {(i % 10) * 100}ms",
                }
            }
        }
    }
}
