use contracts::domain::common::MasterResource;
use contracts::shared::api::MessageResponse;
use contracts::shared::status;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

use super::list_state::ListState;
use super::view_modal::open_view_modal;
use super::MasterView;
use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::shared::api_client;
use crate::shared::config::app_config;
use crate::shared::dialogs;
use crate::shared::modal_stack::{use_modal_stack, ModalStackService};
use crate::shared::toast::{use_toast, ToastService};

/// Controller of a paged master list.
pub struct MasterListVm<R: MasterResource> {
    pub state: RwSignal<ListState<R>>,
    ctx: AppGlobalContext,
    toast: ToastService,
    modal: ModalStackService,
}

impl<R: MasterResource> Clone for MasterListVm<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: MasterResource> Copy for MasterListVm<R> {}

impl<R: MasterView> MasterListVm<R> {
    /// Must be called inside the list component. The first page is loaded at
    /// once and again whenever a form of this resource saves.
    pub fn new() -> Self {
        let vm = Self {
            state: RwSignal::new(ListState::new(app_config().api.per_page)),
            ctx: use_app_context(),
            toast: use_toast(),
            modal: use_modal_stack(),
        };

        let list_key = R::full_name();
        Effect::new(move |_| {
            let revision = vm.ctx.list_revision(&list_key);
            log::debug!("load {} (revision {})", list_key, revision);
            vm.load();
        });
        vm
    }

    pub fn toast(&self) -> ToastService {
        self.toast
    }

    pub fn modal(&self) -> ModalStackService {
        self.modal
    }

    pub fn load(&self) {
        let vm = *self;
        let query = self.state.with_untracked(|s| s.query());
        self.state.update(|s| s.is_loading = true);
        spawn_local(async move {
            let result = api_client::get_list::<R>(R::resource_path(), &query).await;
            vm.state.update(|s| s.is_loading = false);
            match result {
                Ok(response) => {
                    let reload = vm.state.try_update(|s| s.apply(response)).flatten();
                    if reload.is_some() {
                        vm.load();
                    }
                }
                Err(err) => vm.toast.api_error(&err, "Failed to load list"),
            }
        });
    }

    pub fn search(&self, text: &str) {
        self.state.update(|s| s.set_search(text));
        self.load();
    }

    pub fn set_filter(&self, key: &str, value: &str) {
        self.state.update(|s| s.set_filter(key, value));
        self.load();
    }

    pub fn go_to_page(&self, page: u32) {
        self.state.update(|s| s.page = page);
        self.load();
    }

    pub fn open_new(&self) {
        self.ctx
            .open_tab(&R::new_tab_key(), &format!("Add {}", R::element_name()));
    }

    pub fn open_edit(&self, row: &R) {
        self.ctx.open_tab(
            &R::edit_tab_key(row.id()),
            &format!("Edit {}: {}", R::element_name(), row.display_name()),
        );
    }

    /// Fetch the full record and show it read-only.
    pub fn show_details(&self, id: i64) {
        let vm = *self;
        spawn_local(async move {
            match api_client::get_data::<R>(&R::item_path(id)).await {
                Ok(record) => open_view_modal(vm.modal, record),
                Err(err) => vm.toast.api_error(&err, "Failed to load details"),
            }
        });
    }

    /// Confirm, then flip the status of `row`.
    pub fn toggle_status(&self, row: &R) {
        let vm = *self;
        let id = row.id();
        let prompt = status::change_prompt(R::element_name(), row.is_active());
        spawn_local(async move {
            if dialogs::confirm(vm.modal, "Are you sure?", prompt).await {
                vm.send_status_change(id, serde_json::Map::new()).await;
            }
        });
    }

    /// `PUT {res}/change-status/{id}`, then reload the current page.
    pub async fn send_status_change<B: Serialize>(&self, id: i64, body: B) {
        let result =
            api_client::put_json::<B, MessageResponse>(&R::status_path(id), &body).await;
        match result.and_then(MessageResponse::into_result) {
            Ok(message) => {
                self.toast.success(if message.is_empty() {
                    "Status updated".to_string()
                } else {
                    message
                });
                self.load();
            }
            Err(err) => self.toast.api_error(&err, "Failed to change status"),
        }
    }
}
