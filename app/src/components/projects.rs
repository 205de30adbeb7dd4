use dioxus::prelude::*;
use folio_core::ProjectsController;

use crate::use_folio;

/// Mission scrolls. Clicking a card expands its details; clicking it again
/// collapses it.
#[component]
pub fn ProjectsSection() -> Element {
    let folio = use_folio();
    let projects = folio.content.projects.clone();
    let mut selection = use_signal(|| ProjectsController::new(projects.len()));

    rsx! {
        div { class: "py-20 px-6 relative",
            div { class: "max-w-6xl mx-auto text-center mb-16",
                h2 { class: "text-4xl md:text-5xl font-bold mb-6",
                    span { class: "text-foreground", "Jutsu " }
                    span { class: "bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent",
                        "Scrolls"
                    }
                }
            }
            div { class: "max-w-6xl mx-auto grid lg:grid-cols-3 gap-8",
                for (i, project) in projects.iter().enumerate() {
                    {
                        let selected = selection.read().is_selected(i);
                        let ring = if selected { "ring-2 ring-primary scale-105" } else { "" };
                        rsx! {
                            div {
                                key: "{i}",
                                class: "p-6 bg-card border border-primary rounded-lg cursor-pointer transition-all duration-300 {ring}",
                                onclick: move |_| {
                                    selection.write().toggle(i);
                                },
                                div { class: "flex justify-between items-start mb-4",
                                    span { class: "text-4xl", "{project.icon}" }
                                    span { class: "px-2 py-1 rounded text-xs font-bold {project.difficulty.badge_class()}",
                                        "{project.difficulty.label()}"
                                    }
                                }
                                h3 { class: "text-xl font-bold text-foreground mb-1", "{project.title}" }
                                p { class: "text-sm text-accent mb-3", "{project.jutsu_type}" }
                                p { class: "text-muted-foreground mb-4", "{project.description}" }
                                div { class: "flex flex-wrap gap-2",
                                    for tech in project.technologies.iter() {
                                        span { class: "px-2 py-1 bg-muted rounded text-xs", "{tech}" }
                                    }
                                }
                                if selected {
                                    ul { class: "mt-4 space-y-1 text-sm text-muted-foreground animate-scroll-reveal",
                                        for feature in project.features.iter() {
                                            li { "⚡ {feature}" }
                                        }
                                    }
                                    div { class: "mt-4 flex gap-4",
                                        if let Some(github) = &project.github {
                                            a { class: "text-primary text-sm", href: "{github}", target: "_blank", "Source" }
                                        }
                                        if let Some(demo) = &project.demo {
                                            a { class: "text-primary text-sm", href: "{demo}", target: "_blank", "Live Demo" }
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
}
