use contracts::domain::common::MasterResource;
use leptos::prelude::*;
use thaw::*;

use super::form_vm::MasterFormVm;
use crate::shared::components::ui::Checkbox;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};

/// Frame of an add/edit tab: title, fields, the "Active" checkbox and the
/// Save / Reset / Cancel bar.
#[component]
pub fn MasterFormPage<R>(
    vm: MasterFormVm<R>,
    /// Reads and writes the form's status flag
    status: (Signal<bool>, Callback<bool>),
    /// Replaces the default JSON save
    #[prop(optional)]
    on_save: Option<Callback<()>>,
    /// Runs after the form was reset to its loaded values
    #[prop(optional)]
    on_reset: Option<Callback<()>>,
    children: Children,
) -> impl IntoView
where
    R: MasterResource,
{
    let (status_value, set_status) = status;
    let busy = Signal::derive(move || vm.is_saving.get() || vm.is_loading.get());

    view! {
        <PageFrame page_id=page_id(&vm.tab_key(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h1 class="page__title">{vm.title()}</h1>
            </div>
            <div class="page__content">
                <Show when=move || vm.is_loading.get()>
                    <div class="form-loading"><Spinner /></div>
                </Show>
                <div class="form form--grid" class:form--hidden=move || vm.is_loading.get()>
                    {children()}
                    <Checkbox label="Active" checked=status_value on_change=set_status />
                </div>
                <div class="form__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| match on_save {
                            Some(save) => save.run(()),
                            None => vm.save(),
                        }
                        disabled=busy
                    >
                        {move || if vm.is_saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            vm.reset();
                            if let Some(cb) = on_reset {
                                cb.run(());
                            }
                        }
                        disabled=busy
                    >
                        "Reset"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.cancel()>
                        "Cancel"
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
