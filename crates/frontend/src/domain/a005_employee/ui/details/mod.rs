use contracts::domain::a005_employee::Employee;
use contracts::shared::lookup::{endpoints, keyed_pairs};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::lookup_api::{self, load_options, Pairs};
use crate::shared::master::{MasterFormPage, MasterFormVm};

#[component]
pub fn EmployeeDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<Employee>::new(id);
    let designations = RwSignal::new(Pairs::new());

    load_options(
        designations,
        lookup_api::keyed(endpoints::DESIGNATIONS),
        keyed_pairs,
        vm.toast(),
    );
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
            <Select
                label="Designation"
                required=true
                value=vm.field(|f| f.designation.clone())
                on_change=vm.setter("designation", |f, v| f.designation = v)
                options=designations
                placeholder="Select designation"
                error=vm.error("designation")
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
