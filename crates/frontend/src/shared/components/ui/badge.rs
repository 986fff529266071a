use leptos::prelude::*;

/// Badge variant class. Unknown variants fall back to the default look.
pub fn badge_class(variant: Option<&str>, extra: &str) -> String {
    let variant_class = match variant.unwrap_or("default") {
        "secondary" => "badge--secondary",
        "outline" => "badge--outline",
        _ => "badge--default",
    };
    format!("badge {} {}", variant_class, extra).trim_end().to_string()
}

/// Small pill label: beta markers, partner names, "Popular" tiers.
#[component]
pub fn Badge(
    /// Badge variant: "default", "secondary" or "outline"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let class_name = move || badge_class(variant.get().as_deref(), &class.get().unwrap_or_default());

    view! {
        <span class=class_name>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(None, ""), "badge badge--default");
        assert_eq!(badge_class(Some("outline"), ""), "badge badge--outline");
        assert_eq!(
            badge_class(Some("secondary"), "header__beta"),
            "badge badge--secondary header__beta"
        );
        assert_eq!(badge_class(Some("loud"), ""), "badge badge--default");
    }
}
