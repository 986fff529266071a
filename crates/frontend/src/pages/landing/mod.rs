//! Single-page marketing site, one module per group of sections.

pub mod contact;
pub mod faq;
pub mod hero;
pub mod offer;
pub mod product;

use crate::layout::Shell;
use crate::shared::icons::icon;
use contracts::site::{IconItem, LabeledText};
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Shell>
            <hero::Hero />
            <hero::SocialProof />
            <product::Features />
            <product::HowItWorks />
            <product::Marquee />
            <product::Integrations />
            <offer::Pricing />
            <offer::SecurityOverview />
            <contact::EarlyAccess />
            <faq::Faq />
            <contact::Contact />
        </Shell>
    }
}

/// Bulleted list with check marks.
#[component]
pub fn CheckList(items: Vec<String>, #[prop(optional, into)] class: MaybeProp<String>) -> impl IntoView {
    view! {
        <ul class=move || format!("check-list {}", class.get().unwrap_or_default())>
            {items
                .into_iter()
                .map(|item| view! {
                    <li class="check-list__item">{icon("check")}<span>{item}</span></li>
                })
                .collect_view()}
        </ul>
    }
}

/// List whose bullets are the item's own icons.
#[component]
pub fn IconList(items: Vec<IconItem>, #[prop(optional, into)] class: MaybeProp<String>) -> impl IntoView {
    view! {
        <ul class=move || format!("icon-list {}", class.get().unwrap_or_default())>
            {items
                .into_iter()
                .map(|item| view! {
                    <li class="icon-list__item">{icon(&item.icon)}<span>{item.text}</span></li>
                })
                .collect_view()}
        </ul>
    }
}

/// Two-column label/description pairs.
#[component]
pub fn LabeledGrid(entries: Vec<LabeledText>) -> impl IntoView {
    view! {
        <div class="labeled-grid">
            {entries
                .into_iter()
                .map(|entry| view! {
                    <div>
                        <div class="labeled-grid__label">{entry.label}</div>
                        <p class="muted">{entry.text}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
