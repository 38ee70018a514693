use contracts::domain::a007_location::Location;
use contracts::shared::ids::{id_to_value, parse_id};
use contracts::shared::lookup::{to_pairs, DistrictOption, StateOption};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::lookup_api::{self, load_options, load_options_while, Pairs};
use crate::shared::master::{MasterFormPage, MasterFormVm};
use crate::shared::toast::ToastService;

fn load_districts(
    vm: MasterFormVm<Location>,
    target: RwSignal<Pairs>,
    state_id: Option<i64>,
    toast: ToastService,
) {
    target.set(Pairs::new());
    if let Some(state_id) = state_id {
        load_options_while(
            target,
            lookup_api::districts(state_id),
            |options: &Vec<DistrictOption>| to_pairs(options),
            move || vm.form.with_untracked(|f| f.wants_districts_of(state_id)),
            toast,
        );
    }
}

#[component]
pub fn LocationDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<Location>::new(id);
    let toast = vm.toast();
    let states = RwSignal::new(Pairs::new());
    let districts = RwSignal::new(Pairs::new());

    load_options(
        states,
        lookup_api::states(),
        |options: &Vec<StateOption>| to_pairs(options),
        toast,
    );
    vm.load(move |form| load_districts(vm, districts, form.state_id, toast));

    let on_state = Callback::new(move |value: String| {
        let mut changed = None;
        vm.set("state_id", |f| {
            let before = f.state_id;
            let fetch = f.select_state(parse_id(&value));
            if fetch != before {
                changed = Some(fetch);
            }
        });
        if let Some(state_id) = changed {
            load_districts(vm, districts, state_id, toast);
        }
    });

    let status = (vm.field(|f| f.status), vm.setter("status", |f, v| f.status = v));

    view! {
        <MasterFormPage
            vm=vm
            status=status
            on_reset=Callback::new(move |_| {
                load_districts(vm, districts, vm.form.with_untracked(|f| f.state_id), toast)
            })
        >
            <Input
                label="Location Name"
                required=true
                value=vm.field(|f| f.location_name.clone())
                on_input=vm.setter("location_name", |f, v| f.location_name = v)
                error=vm.error("location_name")
            />
            <Select
                label="State"
                required=true
                value=vm.field(|f| id_to_value(f.state_id))
                on_change=on_state
                options=states
                placeholder="Select state"
                error=vm.error("state_id")
            />
            <Select
                label="District"
                required=true
                value=vm.field(|f| id_to_value(f.district_id))
                on_change=vm.setter("district_id", |f, v: String| f.district_id = parse_id(&v))
                options=districts
                placeholder="Select district"
                error=vm.error("district_id")
                disabled=Signal::derive(move || districts.with(|d| d.is_empty()))
            />
        </MasterFormPage>
    }
}
