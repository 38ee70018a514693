use contracts::domain::a008_area::Area;
use contracts::shared::ids::{id_to_value, parse_id};
use contracts::shared::lookup::{endpoints, keyed_pairs, to_pairs, StateOption};
use leptos::prelude::*;

use super::view_model::AreaCascadeVm;
use crate::shared::components::ui::{CheckList, Input, Select};
use crate::shared::lookup_api::{self, load_options, Pairs};
use crate::shared::master::{MasterFormPage, MasterFormVm};

fn to_values(ids: &[i64]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn from_values(values: &[String]) -> Vec<i64> {
    values.iter().filter_map(|v| parse_id(v)).collect()
}

#[component]
pub fn AreaDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<Area>::new(id);
    let cascade = AreaCascadeVm::new(vm);
    let states = RwSignal::new(Pairs::new());
    let area_types = RwSignal::new(Pairs::new());

    load_options(
        states,
        lookup_api::states_with_locations(),
        |options: &Vec<StateOption>| to_pairs(options),
        vm.toast(),
    );
    load_options(area_types, lookup_api::keyed(endpoints::AREA_TYPES), keyed_pairs, vm.toast());
    vm.load(move |form| {
        if vm.is_edit() {
            cascade.prefill(form);
        }
    });

    let district_options =
        Signal::derive(move || cascade.cascade.with(|c| to_pairs(&c.districts)));
    let location_options =
        Signal::derive(move || cascade.cascade.with(|c| to_pairs(&c.locations)));

    let status = (vm.field(|f| f.status), vm.setter("status", |f, v| f.status = v));

    view! {
        <MasterFormPage
            vm=vm
            status=status
            on_reset=Callback::new(move |_| cascade.prefill(vm.form.get_untracked()))
        >
            <Input
                label="Area Name"
                required=true
                value=vm.field(|f| f.area_name.clone())
                on_input=vm.setter("area_name", |f, v| f.area_name = v)
                error=vm.error("area_name")
            />
            <Select
                label="Area Type"
                required=true
                value=vm.field(|f| f.area_type.clone())
                on_change=vm.setter("type", |f, v| f.area_type = v)
                options=area_types
                placeholder="Select area type"
                error=vm.error("type")
            />
            <Select
                label="State"
                required=true
                value=vm.field(|f| id_to_value(f.state_id))
                on_change=Callback::new(move |v: String| cascade.select_state(parse_id(&v)))
                options=states
                placeholder="Select state"
                error=vm.error("state_id")
            />
            <CheckList
                label="Districts"
                required=true
                selected=vm.field(|f| to_values(&f.district_ids))
                on_change=Callback::new(move |v: Vec<String>| cascade.set_districts(from_values(&v)))
                options=district_options
                empty_text="Select a state first"
                error=vm.error("district_ids")
            />
            <CheckList
                label="Locations"
                required=true
                selected=vm.field(|f| to_values(&f.location_ids))
                on_change=Callback::new(move |v: Vec<String>| cascade.set_locations(from_values(&v)))
                options=location_options
                empty_text="Select districts first"
                error=vm.error("location_ids")
            />
        </MasterFormPage>
    }
}
