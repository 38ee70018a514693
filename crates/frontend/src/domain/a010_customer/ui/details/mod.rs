use contracts::domain::a010_customer::{Customer, CustomerCascade};
use contracts::shared::ids::{id_to_value, parse_id};
use contracts::shared::lookup::{endpoints, to_pairs, NamedOption, StateOption};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Input, Select};
use crate::shared::lookup_api::{self, load_options, Pairs};
use crate::shared::master::{MasterFormPage, MasterFormVm};
use crate::shared::toast::ToastService;

/// Districts of the chosen state. A reply for a state that is no longer
/// selected is dropped.
fn fetch_districts(
    vm: MasterFormVm<Customer>,
    cascade: RwSignal<CustomerCascade>,
    state_id: i64,
    toast: ToastService,
) {
    spawn_local(async move {
        match lookup_api::districts_with_locations(state_id).await {
            Ok(options) => {
                if vm.form.with_untracked(|f| f.state_id) == Some(state_id) {
                    cascade.update(|c| c.apply_districts(options));
                }
            }
            Err(err) => toast.api_error(&err, "Failed to load districts"),
        }
    });
}

fn fetch_locations(
    vm: MasterFormVm<Customer>,
    cascade: RwSignal<CustomerCascade>,
    district_id: i64,
    toast: ToastService,
) {
    spawn_local(async move {
        match lookup_api::locations_by_districts(vec![district_id]).await {
            Ok(options) => {
                if vm.form.with_untracked(|f| f.district_id) == Some(district_id) {
                    cascade.update(|c| c.apply_locations(options));
                }
            }
            Err(err) => toast.api_error(&err, "Failed to load locations"),
        }
    });
}

fn prefill(vm: MasterFormVm<Customer>, cascade: RwSignal<CustomerCascade>, toast: ToastService) {
    cascade.set(CustomerCascade::new());
    let (state_id, district_id) = vm.form.with_untracked(|f| cascade.with_untracked(|c| c.prefill(f)));
    if let Some(state_id) = state_id {
        fetch_districts(vm, cascade, state_id, toast);
    }
    if let Some(district_id) = district_id {
        fetch_locations(vm, cascade, district_id, toast);
    }
}

#[component]
pub fn CustomerDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<Customer>::new(id);
    let toast = vm.toast();
    let brands = RwSignal::new(Pairs::new());
    let states = RwSignal::new(Pairs::new());
    let cascade = RwSignal::new(CustomerCascade::new());

    load_options(
        brands,
        lookup_api::named(endpoints::BRANDS),
        |options: &Vec<NamedOption>| to_pairs(options),
        toast,
    );
    load_options(
        states,
        lookup_api::states_with_locations(),
        |options: &Vec<StateOption>| to_pairs(options),
        toast,
    );
    vm.load(move |_| prefill(vm, cascade, toast));

    let on_state = Callback::new(move |value: String| {
        let mut fetch = None;
        vm.set("state_id", |f| {
            cascade.update(|c| fetch = c.select_state(f, parse_id(&value)));
        });
        if let Some(state_id) = fetch {
            fetch_districts(vm, cascade, state_id, toast);
        }
    });

    let on_district = Callback::new(move |value: String| {
        let mut fetch = None;
        vm.set("district_id", |f| {
            cascade.update(|c| fetch = c.select_district(f, parse_id(&value)));
        });
        if let Some(district_id) = fetch {
            fetch_locations(vm, cascade, district_id, toast);
        }
    });

    let districts = Signal::derive(move || cascade.with(|c| to_pairs(&c.districts)));
    let locations = Signal::derive(move || cascade.with(|c| to_pairs(&c.locations)));
    let status = (vm.field(|f| f.status), vm.setter("status", |f, v| f.status = v));

    view! {
        <MasterFormPage
            vm=vm
            status=status
            on_reset=Callback::new(move |_| prefill(vm, cascade, toast))
        >
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
                value=vm.field(|f| f.email.clone())
                on_input=vm.setter("email", |f, v| f.email = v)
                error=vm.error("email")
            />
            <Input
                label="GST Number"
                placeholder="15 characters"
                value=vm.field(|f| f.gstin.clone())
                on_input=vm.setter("gstin", |f, v: String| f.gstin = v.to_uppercase())
                error=vm.error("gstin")
            />
            <Select
                label="Brand"
                required=true
                value=vm.field(|f| id_to_value(f.brand_id))
                on_change=vm.setter("brand_id", |f, v: String| f.brand_id = parse_id(&v))
                options=brands
                placeholder="Select brand"
                error=vm.error("brand_id")
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
                on_change=on_district
                options=districts
                placeholder="Select district"
                error=vm.error("district_id")
                disabled=Signal::derive(move || cascade.with(|c| c.districts.is_empty()))
            />
            <Select
                label="Location"
                required=true
                value=vm.field(|f| id_to_value(f.location_id))
                on_change=vm.setter("location_id", |f, v: String| f.location_id = parse_id(&v))
                options=locations
                placeholder="Select location"
                error=vm.error("location_id")
                disabled=Signal::derive(move || cascade.with(|c| c.locations.is_empty()))
            />
        </MasterFormPage>
    }
}
