use leptos::prelude::*;

use super::{field_error, field_label};

#[component]
pub fn RadioGroup(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Name attribute shared by the inputs
    #[prop(into)]
    name: String,
    /// `(value, label)` pairs
    options: Vec<(String, String)>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let radios = options
        .into_iter()
        .map(|(val, lbl)| {
            let radio_id = format!("{}-{}", name, val);
            let val_for_check = val.clone();
            let val_for_change = val.clone();
            view! {
                <div class="form__radio-wrapper">
                    <input
                        id=radio_id.clone()
                        type="radio"
                        class="form__radio"
                        name=name.clone()
                        value=val
                        prop:checked=move || value.with(|v| *v == val_for_check)
                        on:change=move |_| on_change.run(val_for_change.clone())
                    />
                    <label class="form__radio-label" for=radio_id>
                        {lbl}
                    </label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="form__group" class:form__group--invalid=move || error.with(|e| e.is_some())>
            {field_label(label, required, None)}
            <div class="form__radio-group">{radios}</div>
            {field_error(error)}
        </div>
    }
}
