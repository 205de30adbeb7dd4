use dioxus::prelude::*;

use crate::use_folio;

#[component]
pub fn Footer() -> Element {
    let folio = use_folio();
    let year = js_sys::Date::new_0().get_full_year();

    rsx! {
        footer { class: "py-8 px-6 border-t border-primary/30 text-center text-sm text-muted-foreground",
            p { "© {year} {folio.content.owner}. Forged in the Hidden Leaf Village." }
            p { class: "mt-2", "Believe it! 🍥" }
        }
    }
}
