use leptos::prelude::*;

/// Controlled text input with label
///
/// The value is shown as given and every keystroke is reported as raw text; no parsing.
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the input element (links the label)
    #[prop(into)]
    id: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new raw text on every input event
    on_input: Callback<String>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// `inputmode` hint for virtual keyboards ("decimal", "numeric")
    #[prop(optional, into)]
    input_mode: MaybeProp<String>,
) -> impl IntoView {
    let input_id = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                id=input_id
                class="form__input"
                type="text"
                inputmode=move || input_mode.get()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
