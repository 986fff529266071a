//! In-page navigation helpers built on the DOM scrolling APIs.

use contracts::site::SectionId;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smoothly scroll the section with the given id to the top of the viewport.
///
/// Returns `false` when no such element is on the page, in which case
/// nothing happens.
pub fn scroll_to_section(section: SectionId) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(section.as_str()));

    match element {
        Some(el) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        None => {
            log::debug!("scroll target #{} not found", section);
            false
        }
    }
}

/// Point the location hash at a section and let the browser jump there.
pub fn set_location_hash(section: SectionId) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_hash(&section.anchor()) {
            log::warn!("failed to set location hash: {:?}", err);
        }
    }
}

/// Year for the footer copyright line.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
