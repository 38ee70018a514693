use contracts::domain::a004_design::{Design, FILTER_DESIGN_TYPE};
use contracts::shared::lookup::{endpoints, to_pairs, TitledOption};
use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::components::ui::Select;
use crate::shared::lookup_api::{self, load_options, Pairs};
use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

impl MasterView for Design {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Design Number", self.design_number.clone()),
            ("Design Type", self.design_type_title().to_string()),
            ("Panel Color", self.panel_color_title().to_string()),
            ("A-Section Color", self.a_section_color_title().to_string()),
            ("Frame Color", self.frame_color_title().to_string()),
            ("Finishing", self.finishing_title().to_string()),
        ]
    }

    fn image_url(&self) -> Option<String> {
        self.image.clone().filter(|url| !url.is_empty())
    }
}

fn thumbnail(row: &Design) -> AnyView {
    match row.image_url() {
        Some(url) => view! { <img class="table__thumb" src=url alt=row.design_number.clone() /> }.into_any(),
        None => view! { <span class="table__muted">"-"</span> }.into_any(),
    }
}

#[component]
pub fn DesignList() -> impl IntoView {
    let vm = MasterListVm::<Design>::new();
    let state = vm.state;
    let design_types = RwSignal::new(Pairs::new());
    load_options(
        design_types,
        lookup_api::titled(endpoints::DESIGN_TYPES),
        |options: &Vec<TitledOption>| to_pairs(options),
        vm.toast(),
    );

    let filters: ChildrenFn = Arc::new(move || {
        view! {
            <Select
                label="Design Type"
                value=Signal::derive(move || state.with(|s| s.filter(FILTER_DESIGN_TYPE)))
                on_change=Callback::new(move |value: String| vm.set_filter(FILTER_DESIGN_TYPE, &value))
                options=design_types
                placeholder="All design types"
            />
        }
        .into_any()
    });

    let columns = vec![
        Column::new("Image", 70.0, thumbnail),
        Column::text("Design Number", 130.0, |row: &Design| row.design_number.clone()),
        Column::text("Design Type", 130.0, |row: &Design| row.design_type_title().to_string()),
        Column::text("Panel Color", 120.0, |row: &Design| row.panel_color_title().to_string()),
        Column::text("A-Section Color", 120.0, |row: &Design| {
            row.a_section_color_title().to_string()
        }),
        Column::text("Frame Color", 120.0, |row: &Design| row.frame_color_title().to_string()),
        Column::text("Finishing", 120.0, |row: &Design| row.finishing_title().to_string()),
    ];

    view! {
        <MasterListPage
            vm=vm
            columns=columns
            filters=filters
            search_placeholder="Search by design number"
        />
    }
}
