use leptos::prelude::*;

use super::{field_error, field_label};

/// Single select; the placeholder option carries the empty value.
#[component]
pub fn Select(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// `(value, label)` pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let placeholder_text = move || placeholder.get().unwrap_or_else(|| "Select".to_string());

    view! {
        <div class="form__group" class:form__group--invalid=move || error.with(|e| e.is_some())>
            {field_label(label, required, None)}
            <select
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.with(|v| v.is_empty())>
                    {placeholder_text}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, label)| format!("{}:{}", val, label)
                    children=move |(val, label)| {
                        let val_for_check = val.clone();
                        let is_selected = move || value.with(|v| *v == val_for_check);
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {field_error(error)}
        </div>
    }
}
