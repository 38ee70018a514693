use contracts::domain::a009_area_assign::{AreaAssign, AssignType};
use contracts::shared::ids::{id_to_value, parse_id};
use contracts::shared::lookup::{to_pairs, AreaOption, NamedOption};
use leptos::prelude::*;

use crate::shared::components::ui::{RadioGroup, Select};
use crate::shared::lookup_api::{self, load_options_while, Pairs};
use crate::shared::master::{MasterFormPage, MasterFormVm};
use crate::shared::toast::ToastService;

/// Person and area options both depend on the assign type.
fn load_type_options(
    vm: MasterFormVm<AreaAssign>,
    assign_type: AssignType,
    persons: RwSignal<Pairs>,
    areas: RwSignal<Pairs>,
    toast: ToastService,
) {
    persons.set(Pairs::new());
    areas.set(Pairs::new());
    let still_wanted = move || vm.form.with_untracked(|f| f.wants_options_for(assign_type));
    load_options_while(
        persons,
        lookup_api::named(assign_type.persons_endpoint()),
        |options: &Vec<NamedOption>| to_pairs(options),
        still_wanted,
        toast,
    );
    load_options_while(
        areas,
        lookup_api::areas(assign_type.as_str()),
        |options: &Vec<AreaOption>| to_pairs(options),
        still_wanted,
        toast,
    );
}

#[component]
pub fn AreaAssignDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<AreaAssign>::new(id);
    let toast = vm.toast();
    let persons = RwSignal::new(Pairs::new());
    let areas = RwSignal::new(Pairs::new());

    // Add mode starts on the default type; edit mode keeps the stored one.
    vm.load(move |form| load_type_options(vm, form.assign_type, persons, areas, toast));

    let on_type = Callback::new(move |value: String| {
        let Some(assign_type) = AssignType::parse(&value) else {
            return;
        };
        let mut reload = false;
        vm.set("assign_type", |f| reload = f.select_assign_type(assign_type));
        if reload {
            load_type_options(vm, assign_type, persons, areas, toast);
        }
    });

    let type_options = AssignType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect::<Vec<_>>();
    let person_label = Signal::derive(move || {
        vm.form.with(|f| match f.assign_type {
            AssignType::SalesExecutive => Some("Select sales executive".to_string()),
            AssignType::Distributor => Some("Select distributor".to_string()),
        })
    });

    let status = (vm.field(|f| f.status), vm.setter("status", |f, v| f.status = v));

    view! {
        <MasterFormPage
            vm=vm
            status=status
            on_reset=Callback::new(move |_| {
                load_type_options(vm, vm.form.with_untracked(|f| f.assign_type), persons, areas, toast)
            })
        >
            <RadioGroup
                label="Assign Type"
                name="assign_type"
                required=true
                value=vm.field(|f| f.assign_type.as_str().to_string())
                on_change=on_type
                options=type_options
                error=vm.error("assign_type")
            />
            <Select
                label="Person"
                required=true
                value=vm.field(|f| id_to_value(f.person_id))
                on_change=vm.setter("person_id", |f, v: String| f.person_id = parse_id(&v))
                options=persons
                placeholder=person_label
                error=vm.error("person_id")
            />
            <Select
                label="Area"
                required=true
                value=vm.field(|f| id_to_value(f.area_id))
                on_change=vm.setter("area_id", |f, v: String| f.area_id = parse_id(&v))
                options=areas
                placeholder="Select area"
                error=vm.error("area_id")
            />
        </MasterFormPage>
    }
}
