use leptos::prelude::*;

use super::{field_error, field_label};

/// Multi-select rendered as a scrollable list of checkboxes.
///
/// `on_change` receives the full new selection in option order.
#[component]
pub fn CheckList(
    #[prop(into)]
    label: String,
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Shown when there are no options yet
    #[prop(optional, into)]
    empty_text: MaybeProp<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let toggle = move |value: String, checked: bool| {
        let current = selected.get_untracked();
        let next: Vec<String> = options.with_untracked(|opts| {
            opts.iter()
                .map(|(v, _)| v)
                .filter(|v| {
                    if **v == value {
                        checked
                    } else {
                        current.contains(v)
                    }
                })
                .cloned()
                .collect()
        });
        on_change.run(next);
    };

    view! {
        <div class="form__group" class:form__group--invalid=move || error.with(|e| e.is_some())>
            {field_label(label, required, None)}
            <div class="form__check-list">
                <Show
                    when=move || options.with(|o| !o.is_empty())
                    fallback=move || view! {
                        <div class="form__check-list-empty">
                            {move || empty_text.get().unwrap_or_else(|| "No options".to_string())}
                        </div>
                    }
                >
                    <For
                        each=move || options.get()
                        key=|(val, _)| val.clone()
                        children=move |(val, label)| {
                            let val_for_check = val.clone();
                            let val_for_change = val.clone();
                            view! {
                                <label class="form__check-item">
                                    <input
                                        type="checkbox"
                                        class="form__checkbox"
                                        value=val
                                        prop:checked=move || selected.with(|s| s.contains(&val_for_check))
                                        disabled=move || disabled.get()
                                        on:change=move |ev| toggle(val_for_change.clone(), event_target_checked(&ev))
                                    />
                                    <span>{label}</span>
                                </label>
                            }
                        }
                    />
                </Show>
            </div>
            {field_error(error)}
        </div>
    }
}
