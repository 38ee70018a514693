use leptos::prelude::*;

/// Single checkbox; used for the "Active" status of every form.
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: String,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <div class="form__checkbox-wrapper">
                <input
                    id=id.clone()
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                <label class="form__checkbox-label" for=id>
                    {label}
                </label>
            </div>
        </div>
    }
}
