use contracts::domain::a008_area::Area;
use leptos::prelude::*;

use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

fn type_text(row: &Area) -> String {
    row.type_label
        .clone()
        .or_else(|| row.area_type.clone())
        .unwrap_or_default()
}

fn district_names(row: &Area) -> String {
    row.districts
        .iter()
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn location_names(row: &Area) -> String {
    row.locations
        .iter()
        .map(|l| l.location_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl MasterView for Area {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Area Name", self.area_name.clone()),
            ("Area Type", type_text(self)),
            ("Districts", district_names(self)),
            ("Locations", location_names(self)),
        ]
    }
}

#[component]
pub fn AreaList() -> impl IntoView {
    let vm = MasterListVm::<Area>::new();
    let columns = vec![
        Column::text("Area Name", 180.0, |row: &Area| row.area_name.clone()),
        Column::text("Type", 100.0, type_text),
        Column::text("Districts", 180.0, district_names),
        Column::text("Locations", 240.0, location_names),
    ];

    view! { <MasterListPage vm=vm columns=columns search_placeholder="Search by area name" /> }
}
