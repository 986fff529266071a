pub mod footer;
pub mod global_context;
pub mod header;

use contracts::site::SectionId;
use leptos::prelude::*;

/// Main page shell.
///
/// ```text
/// +------------------------------------------+
/// |   Header (sticky, nav + mobile menu)     |
/// +------------------------------------------+
/// |   Sections, one per anchor               |
/// +------------------------------------------+
/// |   Footer                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <header::Header />
            <main class="site__main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}

/// Width-constrained block that doubles as a scroll target.
#[component]
pub fn Section(
    id: SectionId,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id.as_str() class=move || format!("section {}", class.get().unwrap_or_default())>
            {children()}
        </section>
    }
}

/// Centered heading block used above grids.
#[component]
pub fn SectionIntro(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="section__intro">
            <h2 class="section__title">{title}</h2>
            <p class="muted">{subtitle}</p>
        </div>
    }
}
