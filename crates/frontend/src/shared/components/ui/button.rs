use leptos::prelude::*;

pub fn button_class(variant: Option<&str>, size: Option<&str>, extra: &str) -> String {
    let variant_class = match variant.unwrap_or("primary") {
        "outline" => "button--outline",
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let size_class = match size.unwrap_or("md") {
        "lg" => "button--large",
        "sm" => "button--small",
        _ => "",
    };
    [
        "button",
        variant_class,
        size_class,
        extra,
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}

/// Button component with variants (primary, outline, secondary, ghost) and sizes (sm, md, lg)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline", "secondary" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "lg" or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class_name = move || {
        button_class(
            variant.get().as_deref(),
            size.get().as_deref(),
            &class.get().unwrap_or_default(),
        )
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=class_name
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_defaults() {
        assert_eq!(button_class(None, None, ""), "button button--primary");
    }

    #[test]
    fn test_button_class_variants_and_sizes() {
        assert_eq!(
            button_class(Some("outline"), Some("lg"), ""),
            "button button--outline button--large"
        );
        assert_eq!(
            button_class(Some("ghost"), Some("sm"), "menu-toggle"),
            "button button--ghost button--small menu-toggle"
        );
        assert_eq!(
            button_class(Some("unknown"), Some("xl"), "w-full"),
            "button button--primary w-full"
        );
    }
}
