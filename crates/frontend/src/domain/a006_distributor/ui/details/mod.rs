use contracts::domain::a006_distributor::Distributor;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Textarea};
use crate::shared::master::{MasterFormPage, MasterFormVm};

#[component]
pub fn DistributorDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<Distributor>::new(id);
    vm.load(|_| {});

    let status = (vm.field(|f| f.status), vm.setter("status", |f, v| f.status = v));

    view! {
        <MasterFormPage vm=vm status=status>
            <Input
                label="Name"
                required=true
                value=vm.field(|f| f.name.clone())
                on_input=vm.setter("name", |f, v| f.name = v)
                error=vm.error("name")
            />
            <Input
                label="Phone Number"
                input_type="tel"
                required=true
                value=vm.field(|f| f.phone_no.clone())
                on_input=vm.setter("phone_no", |f, v| f.phone_no = v)
                error=vm.error("phone_no")
            />
            <Input
                label="Email"
                input_type="email"
                required=true
                value=vm.field(|f| f.email.clone())
                on_input=vm.setter("email", |f, v| f.email = v)
                error=vm.error("email")
            />
            <Textarea
                label="Address"
                required=true
                rows=3
                value=vm.field(|f| f.address.clone())
                on_input=vm.setter("address", |f, v| f.address = v)
                error=vm.error("address")
            />
        </MasterFormPage>
    }
}
