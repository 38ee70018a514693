use contracts::domain::a013_door_part_size::DoorPartSize;
use leptos::prelude::*;

use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

fn part_text(row: &DoorPartSize) -> String {
    row.door_part_label.clone().unwrap_or_else(|| row.part_key())
}

impl MasterView for DoorPartSize {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![("Door Part", part_text(self)), ("Size", self.size.clone())]
    }
}

#[component]
pub fn DoorPartSizeList() -> impl IntoView {
    let vm = MasterListVm::<DoorPartSize>::new();
    let columns = vec![
        Column::text("Door Part", 180.0, part_text),
        Column::text("Size", 160.0, |row: &DoorPartSize| row.size.clone()),
    ];

    view! { <MasterListPage vm=vm columns=columns search_placeholder="Search by size" /> }
}
