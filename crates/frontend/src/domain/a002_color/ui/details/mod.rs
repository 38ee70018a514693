use contracts::domain::a002_color::Color;
use leptos::prelude::*;

use crate::shared::components::ui::Input;
use crate::shared::master::{MasterFormPage, MasterFormVm};

#[component]
pub fn ColorDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<Color>::new(id);
    vm.load(|_| {});

    let status = (vm.field(|f| f.status), vm.setter("status", |f, v| f.status = v));

    view! {
        <MasterFormPage vm=vm status=status>
            <Input
                label="Title"
                required=true
                value=vm.field(|f| f.title.clone())
                on_input=vm.setter("title", |f, v| f.title = v)
                error=vm.error("title")
            />
            <Input
                label="Short Name"
                required=true
                value=vm.field(|f| f.short.clone())
                on_input=vm.setter("short", |f, v| f.short = v)
                error=vm.error("short")
            />
        </MasterFormPage>
    }
}
