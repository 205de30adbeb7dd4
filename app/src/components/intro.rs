use dioxus::prelude::*;

/// Cinematic intro shown before the page. `loading` drives the fade-out of
/// the greeting; the parent removes the whole screen when the intro ends.
#[component]
pub fn IntroScreen(loading: bool) -> Element {
    let text_class = if loading { "opacity-100 scale-100" } else { "opacity-0 scale-110" };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-background overflow-hidden",
            div { class: "text-center relative",
                div { class: "absolute inset-0 -m-20",
                    for i in 0..100u32 {
                        div {
                            key: "{i}",
                            class: "absolute w-1 h-1 bg-primary/30 rounded-full animate-float",
                            style: "left: {(i * 37) % 100}%; top: {(i * 61) % 100}%; animation-delay: {(i % 30) * 100}ms",
                        }
                    }
                }
                div { class: "relative z-10 transition-all duration-2000 {text_class}",
                    div { class: "text-6xl mb-6 animate-chakra-pulse", "🍃" }
                    h1 { class: "text-4xl md:text-6xl font-bold mb-4 typing-effect",
                        span { class: "bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent",
                            "Welcome to the Hidden Leaf Village"
                        }
                    }
                    p { class: "text-xl text-muted-foreground mb-8 animate-ninja-slide",
                        "Where code meets chakra..."
                    }
                    div { class: "w-32 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full animate-glow" }
                }
            }
        }
    }
}
