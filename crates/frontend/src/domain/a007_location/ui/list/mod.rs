use contracts::domain::a007_location::Location;
use leptos::prelude::*;

use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

impl MasterView for Location {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Location Name", self.location_name.clone()),
            ("District", self.district_name().to_string()),
            ("State", self.state_name().to_string()),
        ]
    }
}

#[component]
pub fn LocationList() -> impl IntoView {
    let vm = MasterListVm::<Location>::new();
    let columns = vec![
        Column::text("Location Name", 200.0, |row: &Location| row.location_name.clone()),
        Column::text("District", 160.0, |row: &Location| row.district_name().to_string()),
        Column::text("State", 160.0, |row: &Location| row.state_name().to_string()),
    ];

    view! { <MasterListPage vm=vm columns=columns search_placeholder="Search by location name" /> }
}
