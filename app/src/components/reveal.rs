use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{RevealSection, Section};

use crate::host::dom_targets;
use crate::use_folio;

/// Reveal flags for the `len` items tagged `data-reveal="{group}"`.
///
/// Items must carry `id="{group}-{i}"` and `data-index="{i}"`. Targets are
/// collected from the DOM after the first render; a flag never goes back to
/// `false`.
pub fn use_reveal(group: &'static str, len: usize) -> Signal<Vec<bool>> {
    let folio = use_folio();
    let mut revealed = use_signal(|| vec![false; len]);

    let section = use_hook(move || {
        let section = RevealSection::new(folio.observer.clone(), &folio.config.reveal, group, len);
        section.on_reveal(move |index| {
            if let Some(slot) = revealed.write().get_mut(index as usize) {
                *slot = true;
            }
        });
        Rc::new(RefCell::new(section))
    });

    use_effect({
        let section = section.clone();
        move || {
            let subscribed = section.borrow_mut().mount_targets(dom_targets(group));
            tracing::debug!(group, subscribed, "Reveal section mounted");
        }
    });

    use_drop(move || section.borrow_mut().unmount());

    revealed
}
