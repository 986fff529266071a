use leptos::prelude::*;

/// Uncontrolled text input; the browser keeps the value.
#[component]
pub fn Input(
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            class=move || format!("form__input {}", additional_class())
            type=input_t
            name=move || name.get()
            placeholder=move || placeholder.get()
            required=required
            autocomplete=move || autocomplete.get()
        />
    }
}
