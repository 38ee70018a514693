use contracts::domain::common::{MasterForm, MasterResource};
use contracts::shared::api::ApiError;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::marker::PhantomData;

use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::shared::api_client;
use crate::shared::toast::{use_toast, ToastService};

/// State and commands of an add/edit tab.
///
/// `id == None` is the add screen. Saving validates locally first; server
/// field errors land in `errors`, anything else is toasted.
pub struct MasterFormVm<R: MasterResource> {
    pub id: Option<i64>,
    pub form: RwSignal<R::Form>,
    /// Snapshot restored by Reset
    pub initial: RwSignal<R::Form>,
    pub errors: RwSignal<FieldErrors>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    ctx: AppGlobalContext,
    toast: ToastService,
    _resource: PhantomData<fn() -> R>,
}

impl<R: MasterResource> Clone for MasterFormVm<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: MasterResource> Copy for MasterFormVm<R> {}

impl<R: MasterResource> MasterFormVm<R> {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            form: RwSignal::new(R::Form::default()),
            initial: RwSignal::new(R::Form::default()),
            errors: RwSignal::new(FieldErrors::new()),
            is_loading: RwSignal::new(id.is_some()),
            is_saving: RwSignal::new(false),
            ctx: use_app_context(),
            toast: use_toast(),
            _resource: PhantomData,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn tab_key(&self) -> String {
        match self.id {
            Some(id) => R::edit_tab_key(id),
            None => R::new_tab_key(),
        }
    }

    pub fn title(&self) -> String {
        if self.is_edit() {
            format!("Edit {}", R::element_name())
        } else {
            format!("Add {}", R::element_name())
        }
    }

    pub fn toast(&self) -> ToastService {
        self.toast
    }

    /// Edit mode: fetch `{res}/{id}/edit`, then hand the form to `loaded`
    /// (cascading forms start their option prefetch there).
    pub fn load(&self, loaded: impl FnOnce(R::Form) + 'static) {
        let Some(id) = self.id else {
            loaded(self.form.get_untracked());
            return;
        };
        let vm = *self;
        spawn_local(async move {
            match api_client::get_data::<R::Form>(&R::edit_path(id)).await {
                Ok(form) => {
                    vm.form.set(form.clone());
                    vm.initial.set(form.clone());
                    loaded(form);
                }
                Err(err) => vm.toast.api_error(&err, "Failed to load details"),
            }
            vm.is_loading.set(false);
        });
    }

    /// Change the form and drop the error of the edited field.
    pub fn set(&self, field: &str, change: impl FnOnce(&mut R::Form)) {
        self.form.update(change);
        self.errors.update(|e| e.remove(field));
    }

    /// Reactive view of one form value
    pub fn field<T>(&self, read: impl Fn(&R::Form) -> T + Send + Sync + 'static) -> Signal<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let form = self.form;
        Signal::derive(move || form.with(|f| read(f)))
    }

    /// Input handler writing one form value
    pub fn setter<T: 'static>(
        &self,
        field: &'static str,
        write: impl Fn(&mut R::Form, T) + Send + Sync + 'static,
    ) -> Callback<T> {
        let vm = *self;
        Callback::new(move |value: T| vm.set(field, |f| write(f, value)))
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn reset(&self) {
        self.form.set(self.initial.get_untracked());
        self.errors.set(FieldErrors::new());
    }

    pub fn cancel(&self) {
        self.ctx.close_tab(&self.tab_key());
    }

    /// JSON `POST {res}` or `PUT {res}/{id}`.
    pub fn save(&self) {
        self.save_with(|form, id| async move {
            match id {
                Some(id) => api_client::update(&R::item_path(id), &form).await,
                None => api_client::create(R::resource_path(), &form).await,
            }
        });
    }

    /// Validate, then run `submit`. On success the list is refreshed and the
    /// tab closes.
    pub fn save_with<F, Fut>(&self, submit: F)
    where
        F: FnOnce(R::Form, Option<i64>) -> Fut + 'static,
        Fut: Future<Output = Result<String, ApiError>> + 'static,
    {
        let form = self.form.get_untracked();
        let errors = form.validate();
        if !errors.is_empty() {
            log::debug!("{} form has {} invalid field(s)", R::full_name(), errors.len());
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::new());
        self.is_saving.set(true);

        let vm = *self;
        spawn_local(async move {
            let result = submit(form, vm.id).await;
            vm.is_saving.set(false);
            match result {
                Ok(message) => vm.finish(message),
                Err(err) => vm.fail(err),
            }
        });
    }

    fn finish(&self, message: String) {
        let fallback = if self.is_edit() {
            format!("{} updated successfully", R::element_name())
        } else {
            format!("{} created successfully", R::element_name())
        };
        self.toast
            .success(if message.is_empty() { fallback } else { message });
        self.ctx.bump_list_revision(&R::full_name());
        self.ctx.close_tab(&self.tab_key());
        self.ctx.open_tab(&R::full_name(), R::list_name());
    }

    fn fail(&self, err: ApiError) {
        match err.field_errors() {
            Some(fields) => self.errors.set(fields.clone()),
            None => self.toast.api_error(&err, "Something went wrong"),
        }
    }
}
