use contracts::domain::a012_shift_time::ShiftTime;
use leptos::prelude::*;

use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

fn type_text(row: &ShiftTime) -> String {
    row.type_label
        .clone()
        .or_else(|| row.shift_type.clone())
        .unwrap_or_default()
}

impl MasterView for ShiftTime {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            ("Type", type_text(self)),
            ("Timing", self.span()),
        ]
    }
}

#[component]
pub fn ShiftTimeList() -> impl IntoView {
    let vm = MasterListVm::<ShiftTime>::new();
    let columns = vec![
        Column::text("Title", 180.0, |row: &ShiftTime| row.title.clone()),
        Column::text("Type", 120.0, type_text),
        Column::text("Timing", 140.0, |row: &ShiftTime| row.span()),
    ];

    view! { <MasterListPage vm=vm columns=columns search_placeholder="Search by title" /> }
}
