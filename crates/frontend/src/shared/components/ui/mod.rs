//! Labelled form controls with an inline error line.
//!
//! Every control renders `form__group` > label, control, `form__error`.
//! The error signal is normally a view of the form's `FieldErrors`.

pub mod badge;
pub mod checkbox;
pub mod check_list;
pub mod file_input;
pub mod input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use badge::StatusBadge;
pub use check_list::CheckList;
pub use checkbox::Checkbox;
pub use file_input::ImageInput;
pub use input::Input;
pub use radio::RadioGroup;
pub use select::Select;
pub use textarea::Textarea;

use leptos::prelude::*;

fn field_label(label: String, required: bool, for_id: Option<String>) -> impl IntoView {
    view! {
        <label class="form__label" for=for_id>
            {label}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}

fn field_error(error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|msg| view! { <div class="form__error">{msg}</div> })
}
