use contracts::domain::a012_shift_time::{short_time, ShiftTime};
use contracts::shared::lookup::{endpoints, keyed_pairs};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::lookup_api::{self, load_options, Pairs};
use crate::shared::master::{MasterFormPage, MasterFormVm};

#[component]
pub fn ShiftTimeDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<ShiftTime>::new(id);
    let shift_types = RwSignal::new(Pairs::new());

    load_options(
        shift_types,
        lookup_api::keyed(endpoints::SHIFT_TYPES),
        keyed_pairs,
        vm.toast(),
    );
    // <input type="time"> only takes HH:MM
    vm.load(move |form| {
        let trimmed = (
            short_time(&form.start_time).to_string(),
            short_time(&form.end_time).to_string(),
        );
        vm.form.update(|f| (f.start_time, f.end_time) = trimmed.clone());
        vm.initial.update(|f| (f.start_time, f.end_time) = trimmed);
    });

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
            <Select
                label="Type"
                required=true
                value=vm.field(|f| f.shift_type.clone())
                on_change=vm.setter("type", |f, v| f.shift_type = v)
                options=shift_types
                placeholder="Select type"
                error=vm.error("type")
            />
            <Input
                label="Start Time"
                input_type="time"
                required=true
                value=vm.field(|f| f.start_time.clone())
                on_input=vm.setter("start_time", |f, v| f.start_time = v)
                error=vm.error("start_time")
            />
            <Input
                label="End Time"
                input_type="time"
                required=true
                value=vm.field(|f| f.end_time.clone())
                on_input=vm.setter("end_time", |f, v| f.end_time = v)
                error=vm.error("end_time")
            />
        </MasterFormPage>
    }
}
