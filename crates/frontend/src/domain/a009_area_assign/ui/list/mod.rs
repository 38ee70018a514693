use contracts::domain::a009_area_assign::{AreaAssign, AssignType, FILTER_ASSIGN_TYPE};
use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::components::ui::Select;
use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

impl MasterView for AreaAssign {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Assign Type", self.type_label()),
            ("Person", self.person_name().to_string()),
            ("Area", self.area_name().to_string()),
        ]
    }
}

fn assign_type_options() -> Vec<(String, String)> {
    AssignType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect()
}

#[component]
pub fn AreaAssignList() -> impl IntoView {
    let vm = MasterListVm::<AreaAssign>::new();
    let state = vm.state;

    let filters: ChildrenFn = Arc::new(move || {
        view! {
            <Select
                label="Assign Type"
                value=Signal::derive(move || state.with(|s| s.filter(FILTER_ASSIGN_TYPE)))
                on_change=Callback::new(move |value: String| vm.set_filter(FILTER_ASSIGN_TYPE, &value))
                options=Signal::derive(assign_type_options)
                placeholder="All types"
            />
        }
        .into_any()
    });

    let columns = vec![
        Column::text("Assign Type", 140.0, |row: &AreaAssign| row.type_label()),
        Column::text("Person", 180.0, |row: &AreaAssign| row.person_name().to_string()),
        Column::text("Area", 180.0, |row: &AreaAssign| row.area_name().to_string()),
    ];

    view! {
        <MasterListPage
            vm=vm
            columns=columns
            filters=filters
            search_placeholder="Search by person or area"
        />
    }
}
