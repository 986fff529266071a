use leptos::prelude::*;

/// Uncontrolled multi-line input.
#[component]
pub fn Textarea(
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <textarea
            class=move || format!("form__textarea {}", additional_class())
            name=move || name.get()
            placeholder=move || placeholder.get()
            required=required
            rows=textarea_rows
        ></textarea>
    }
}
