//! Card primitives: a Thaw card with the `card-appear` entry animation plus
//! plain header/title/content slots.
//!
//! ```text
//! <Card delay_ms=80 class="card--highlight">
//!     <CardHeader>
//!         <CardTitle>"Premium"</CardTitle>
//!     </CardHeader>
//!     <CardContent>"..."</CardContent>
//! </Card>
//! ```

use leptos::prelude::*;
use thaw::Card as ThawCard;

/// Inline style for the appear animation; `delay_ms` staggers sibling cards.
pub fn appear_style(delay_ms: u32) -> String {
    format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
}

#[component]
pub fn Card(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let class_name = format!("card {}", class.get_untracked().unwrap_or_default());

    view! {
        <ThawCard class=class_name attr:style=appear_style(delay_ms)>
            {children()}
        </ThawCard>
    }
}

#[component]
pub fn CardHeader(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || format!("card__header {}", class.get().unwrap_or_default())>
            {children()}
        </div>
    }
}

#[component]
pub fn CardTitle(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h4 class=move || format!("card__title {}", class.get().unwrap_or_default())>
            {children()}
        </h4>
    }
}

#[component]
pub fn CardContent(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || format!("card__content {}", class.get().unwrap_or_default())>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear_style_carries_delay() {
        assert_eq!(
            appear_style(160),
            "animation: card-appear 0.28s ease-out 160ms both;"
        );
    }
}
