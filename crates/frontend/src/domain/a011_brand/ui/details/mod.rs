use contracts::domain::a011_brand::Brand;
use leptos::prelude::*;

use crate::shared::components::ui::Input;
use crate::shared::master::{MasterFormPage, MasterFormVm};

#[component]
pub fn BrandDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<Brand>::new(id);
    vm.load(|_| {});

    let status = (vm.field(|f| f.status), vm.setter("status", |f, v| f.status = v));

    view! {
        <MasterFormPage vm=vm status=status>
            <Input
                label="Brand Name"
                required=true
                value=vm.field(|f| f.name.clone())
                on_input=vm.setter("name", |f, v| f.name = v)
                error=vm.error("name")
            />
        </MasterFormPage>
    }
}
