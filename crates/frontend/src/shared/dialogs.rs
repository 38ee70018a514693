//! Awaitable confirmation and choice dialogs on top of the modal stack.
//!
//! The dialog owns the sending half of a oneshot channel; the buttons resolve
//! it. Closing the modal any other way (Escape, overlay click) drops the
//! sender and the awaiting side sees a cancellation.

use futures::channel::oneshot;
use leptos::prelude::*;
use std::sync::{Arc, Mutex};
use thaw::*;

use super::modal_stack::{ModalHandle, ModalStackService};

type Slot<T> = Arc<Mutex<Option<oneshot::Sender<T>>>>;

fn resolve<T>(slot: &Slot<T>, handle: &ModalHandle, value: T) {
    let sender = slot.lock().ok().and_then(|mut s| s.take());
    if let Some(tx) = sender {
        let _ = tx.send(value);
    }
    handle.close();
}

/// "Are you sure?" dialog. Resolves to `false` on Cancel or dismissal.
pub async fn confirm(
    modal: ModalStackService,
    title: impl Into<String>,
    text: impl Into<String>,
) -> bool {
    let (tx, rx) = oneshot::channel::<bool>();
    let slot: Slot<bool> = Arc::new(Mutex::new(Some(tx)));
    let title = title.into();
    let text = text.into();

    modal.push_with_frame(None, Some("modal--dialog".to_string()), move |handle| {
        let (slot_yes, handle_yes) = (slot.clone(), handle.clone());
        let (slot_no, handle_no) = (slot.clone(), handle.clone());
        view! {
            <div class="dialog">
                <h3 class="dialog__title">{title.clone()}</h3>
                <p class="dialog__text">{text.clone()}</p>
                <div class="dialog__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| resolve(&slot_no, &handle_no, false)
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| resolve(&slot_yes, &handle_yes, true)
                    >
                        "Yes"
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });

    rx.await.unwrap_or(false)
}

/// Pick one value from `options` (`(value, label)` pairs).
///
/// `accept` turns the picked value into the result or into an inline error;
/// the dialog stays open until it accepts. Cancel resolves to `None`.
pub async fn choose<T, F>(
    modal: ModalStackService,
    title: impl Into<String>,
    options: Vec<(String, String)>,
    placeholder: impl Into<String>,
    accept: F,
) -> Option<T>
where
    T: Send + 'static,
    F: Fn(&str) -> Result<T, String> + Send + Sync + 'static,
{
    let (tx, rx) = oneshot::channel::<Option<T>>();
    let slot: Slot<Option<T>> = Arc::new(Mutex::new(Some(tx)));
    let title = title.into();
    let placeholder = placeholder.into();
    let accept = Arc::new(accept);

    modal.push_with_frame(None, Some("modal--dialog".to_string()), move |handle| {
        let selected = RwSignal::new(String::new());
        let error = RwSignal::new(Option::<String>::None);

        let (slot_ok, handle_ok) = (slot.clone(), handle.clone());
        let (slot_cancel, handle_cancel) = (slot.clone(), handle.clone());
        let accept = accept.clone();
        let on_ok = move |_| match accept(&selected.get_untracked()) {
            Ok(value) => resolve(&slot_ok, &handle_ok, Some(value)),
            Err(msg) => error.set(Some(msg)),
        };

        let option_views = options
            .iter()
            .map(|(value, label)| view! { <option value=value.clone()>{label.clone()}</option> })
            .collect_view();

        view! {
            <div class="dialog">
                <h3 class="dialog__title">{title.clone()}</h3>
                <select
                    class="form__select"
                    on:change=move |ev| {
                        selected.set(event_target_value(&ev));
                        error.set(None);
                    }
                >
                    <option value="">{placeholder.clone()}</option>
                    {option_views}
                </select>
                {move || error.get().map(|msg| view! { <div class="form__error">{msg}</div> })}
                <div class="dialog__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| resolve(&slot_cancel, &handle_cancel, None)
                    >
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=on_ok>
                        "Submit"
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });

    rx.await.ok().flatten()
}
