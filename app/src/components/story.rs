use dioxus::prelude::*;
use folio_core::Presentation;

use super::use_reveal;
use crate::use_folio;

/// The ninja-path timeline. Events fade in as they scroll into view.
#[component]
pub fn StorySection() -> Element {
    let folio = use_folio();
    let timeline = folio.content.timeline.clone();
    let revealed = use_reveal("story", timeline.len());

    rsx! {
        div { class: "py-20 px-6 relative",
            div { class: "max-w-4xl mx-auto text-center mb-16",
                h2 { class: "text-4xl md:text-5xl font-bold mb-6",
                    span { class: "text-foreground", "My " }
                    span { class: "bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent",
                        "Ninja Way"
                    }
                }
            }
            div { class: "max-w-4xl mx-auto relative",
                div { class: "absolute left-1/2 w-1 h-full bg-gradient-to-b from-primary via-accent to-primary" }
                for (i, event) in timeline.iter().enumerate() {
                    {
                        let shown = revealed.read().get(i).copied().unwrap_or(false);
                        let presentation = if shown { Presentation::Revealed } else { Presentation::Hidden };
                        let side = if i % 2 == 0 { "md:pr-1/2 md:text-right" } else { "md:pl-1/2" };
                        rsx! {
                            div {
                                key: "{i}",
                                id: "story-{i}",
                                "data-reveal": "story",
                                "data-index": "{i}",
                                class: "relative mb-12 transition-all duration-1000 {presentation.css_class()} {side}",
                                div { class: "p-6 bg-card border border-primary rounded-lg chakra-glow",
                                    div { class: "text-3xl mb-2", "{event.icon}" }
                                    div { class: "text-sm text-accent font-bold", "{event.year} · {event.rank}" }
                                    h3 { class: "text-xl font-bold text-foreground mb-1", "{event.title}" }
                                    p { class: "text-sm text-primary mb-3", "{event.location}" }
                                    p { class: "text-muted-foreground", "{event.description}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
