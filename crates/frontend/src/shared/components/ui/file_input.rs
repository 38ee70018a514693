use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use super::{field_error, field_label};

/// File picker for a single image with a thumbnail of the stored one.
#[component]
pub fn ImageInput(
    #[prop(into)]
    label: String,
    /// Value of the `accept` attribute
    #[prop(into)]
    accept: String,
    on_pick: Callback<Option<File>>,
    /// URL of the image already on the server
    #[prop(optional, into)]
    current_url: Signal<Option<String>>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        on_pick.run(file);
    };

    view! {
        <div class="form__group" class:form__group--invalid=move || error.with(|e| e.is_some())>
            {field_label(label, false, None)}
            <input type="file" class="form__file" accept=accept on:change=on_change />
            {move || {
                current_url
                    .get()
                    .filter(|url| !url.is_empty())
                    .map(|url| view! { <img class="form__image-preview" src=url alt="current image" /> })
            }}
            {field_error(error)}
        </div>
    }
}
