use crate::layout::global_context::use_landing;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use contracts::site::SectionId;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Anchor that scrolls instead of jumping; keeps the `href` for no-JS and
/// middle-click.
#[component]
pub fn NavLink(section: SectionId, #[prop(optional, into)] class: MaybeProp<String>) -> impl IntoView {
    let ctx = use_landing();

    view! {
        <a
            href=section.anchor()
            class=move || class.get().unwrap_or_else(|| "nav__link".to_string())
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                ctx.scroll_to(section);
            }
        >
            {section.nav_label()}
        </a>
    }
}

#[component]
pub fn Brand() -> impl IntoView {
    let ctx = use_landing();
    let name = ctx.with_site(|site| site.brand.name.clone());

    view! {
        <div class="brand">
            <div class="brand__mark">{icon("compass")}</div>
            <span class="brand__name">{name}</span>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_landing();
    let (beta_label, join_label) =
        ctx.with_site(|site| (site.brand.beta_label.clone(), site.brand.join_label.clone()));

    let toggle_menu = move |_: MouseEvent| ctx.toggle_menu();
    let join = move |_: MouseEvent| ctx.scroll_to(SectionId::Cta);

    view! {
        <header class="header">
            <div class="header__bar">
                <div class="header__brand">
                    <Brand />
                    <Badge variant="secondary" class="header__beta">{beta_label}</Badge>
                </div>

                <nav class="header__nav">
                    {SectionId::NAV
                        .into_iter()
                        .map(|section| view! { <NavLink section=section /> })
                        .collect_view()}
                </nav>

                <div class="header__actions">
                    <Button on_click=Callback::new(join)>{join_label}</Button>
                    <button
                        class="header__menu-toggle"
                        aria-label=move || if ctx.is_menu_open() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || ctx.is_menu_open().to_string()
                        on:click=toggle_menu
                    >
                        {move || if ctx.is_menu_open() { icon("x") } else { icon("menu") }}
                    </button>
                </div>
            </div>

            <Show when=move || ctx.is_menu_open()>
                <div class="header__mobile">
                    {SectionId::NAV
                        .into_iter()
                        .map(|section| view! { <NavLink section=section class="header__mobile-link" /> })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}
