use dioxus::prelude::*;

use crate::use_folio;

#[component]
pub fn ContactSection() -> Element {
    let folio = use_folio();
    let contacts = folio.content.contacts.clone();

    rsx! {
        div { class: "py-20 px-6 text-center",
            h2 { class: "text-4xl md:text-5xl font-bold mb-6",
                span { class: "text-foreground", "Send a " }
                span { class: "bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent",
                    "Summoning Scroll"
                }
            }
            p { class: "text-xl text-muted-foreground max-w-2xl mx-auto mb-12",
                "Ready for the next mission? Reach out through any of these channels."
            }
            div { class: "flex flex-wrap justify-center gap-6",
                for contact in contacts.iter() {
                    a {
                        key: "{contact.label}",
                        class: "px-6 py-4 bg-card border border-primary rounded-lg chakra-glow flex items-center gap-3",
                        href: "{contact.url}",
                        target: "_blank",
                        span { class: "text-2xl", "{contact.icon}" }
                        span { class: "font-semibold", "{contact.label}" }
                    }
                }
            }
        }
    }
}
