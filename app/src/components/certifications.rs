use dioxus::prelude::*;
use folio_core::Presentation;

use super::use_reveal;
use crate::use_folio;

/// Certification scrolls, revealed one by one on scroll.
#[component]
pub fn CertificationsSection() -> Element {
    let folio = use_folio();
    let certifications = folio.content.certifications.clone();
    let revealed = use_reveal("cert", certifications.len());

    rsx! {
        div { class: "py-20 px-6",
            div { class: "max-w-6xl mx-auto text-center mb-16",
                h2 { class: "text-4xl md:text-5xl font-bold mb-6",
                    span { class: "text-foreground", "Sacred " }
                    span { class: "bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent",
                        "Scrolls"
                    }
                }
            }
            div { class: "max-w-6xl mx-auto grid md:grid-cols-2 lg:grid-cols-3 gap-8",
                for (i, cert) in certifications.iter().enumerate() {
                    {
                        let shown = revealed.read().get(i).copied().unwrap_or(false);
                        let presentation = if shown { Presentation::Revealed } else { Presentation::Hidden };
                        let delay = i * 200;
                        rsx! {
                            div {
                                key: "{i}",
                                id: "cert-{i}",
                                "data-reveal": "cert",
                                "data-index": "{i}",
                                class: "p-6 bg-card border border-primary rounded-lg transition-all duration-700 {presentation.css_class()}",
                                style: "transition-delay: {delay}ms",
                                div { class: "flex justify-between items-start mb-4",
                                    span { class: "text-4xl", "{cert.icon}" }
                                    span { class: "px-2 py-1 rounded text-xs font-bold {cert.difficulty.badge_class()}",
                                        "{cert.difficulty.label()}"
                                    }
                                }
                                h3 { class: "text-lg font-bold text-foreground mb-1", "{cert.title}" }
                                p { class: "text-sm text-accent mb-2", "{cert.issuer} · {cert.year}" }
                                p { class: "text-sm text-muted-foreground mb-4", "{cert.description}" }
                                div { class: "flex flex-wrap gap-2 mb-4",
                                    for skill in cert.skills.iter() {
                                        span { class: "px-2 py-1 bg-muted rounded text-xs", "{skill}" }
                                    }
                                }
                                if let Some(link) = &cert.link {
                                    a {
                                        class: "text-primary text-sm font-semibold",
                                        href: "{link}",
                                        target: "_blank",
                                        "View Scroll"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
