use contracts::domain::a013_door_part_size::DoorPartSize;
use contracts::shared::lookup::{endpoints, keyed_pairs};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::lookup_api::{self, load_options, Pairs};
use crate::shared::master::{MasterFormPage, MasterFormVm};

#[component]
pub fn DoorPartSizeDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<DoorPartSize>::new(id);
    let parts = RwSignal::new(Pairs::new());

    load_options(parts, lookup_api::keyed(endpoints::DOOR_PARTS), keyed_pairs, vm.toast());
    vm.load(|_| {});

    let status = (vm.field(|f| f.status), vm.setter("status", |f, v| f.status = v));

    view! {
        <MasterFormPage vm=vm status=status>
            <Select
                label="Door Part"
                required=true
                value=vm.field(|f| f.door_part_id.clone())
                on_change=vm.setter("door_part_id", |f, v| f.door_part_id = v)
                options=parts
                placeholder="Select part"
                error=vm.error("door_part_id")
            />
            <Input
                label="Size"
                required=true
                placeholder="e.g. 2100 x 900"
                value=vm.field(|f| f.size.clone())
                on_input=vm.setter("size", |f, v| f.size = v)
                error=vm.error("size")
            />
        </MasterFormPage>
    }
}
