use crate::shared::scroll::scroll_to_section;
use contracts::site::{SectionId, SiteContent};
use leptos::prelude::*;

/// Page-wide state of the landing page: the loaded copy and whether the
/// mobile navigation is expanded.
#[derive(Clone, Copy)]
pub struct LandingContext {
    pub site: StoredValue<SiteContent>,
    pub menu_open: RwSignal<bool>,
}

impl LandingContext {
    pub fn new(site: SiteContent) -> Self {
        Self {
            site: StoredValue::new(site),
            menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    /// Scroll to a section; the mobile menu closes only if the target exists.
    pub fn scroll_to(&self, section: SectionId) {
        if scroll_to_section(section) {
            self.close_menu();
        }
    }

    /// Read access to the site copy without cloning the whole tree.
    pub fn with_site<T>(&self, f: impl FnOnce(&SiteContent) -> T) -> T {
        self.site.with_value(f)
    }
}

pub fn use_landing() -> LandingContext {
    use_context::<LandingContext>().expect("LandingContext context not found")
}
