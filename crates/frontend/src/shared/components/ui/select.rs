use leptos::prelude::*;

/// Select with label and an empty placeholder option
///
/// `value` is `None` (or a value missing from `options`) while nothing is chosen;
/// the placeholder is shown then. Choosing the placeholder reports nothing.
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// ID for the select element
    #[prop(into)]
    id: String,
    /// Currently selected option value
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Called with the chosen option value
    on_change: Callback<String>,
    #[prop(into)]
    placeholder: String,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let select_id = id.clone();
    let nothing_selected = move || {
        let current = value.get();
        !options
            .get()
            .iter()
            .any(|(val, _)| Some(val) == current.as_ref())
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let chosen = event_target_value(&ev);
                    if !chosen.is_empty() {
                        on_change.run(chosen);
                    }
                }
            >
                <option value="" disabled=true selected=nothing_selected>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, label)| (val.clone(), label.clone())
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get().as_deref() == Some(val_clone.as_str());
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
