use contracts::domain::a002_color::Color;
use leptos::prelude::*;

use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

impl MasterView for Color {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![("Title", self.title.clone()), ("Short Name", self.short.clone())]
    }
}

#[component]
pub fn ColorList() -> impl IntoView {
    let vm = MasterListVm::<Color>::new();
    let columns = vec![
        Column::text("Title", 220.0, |row: &Color| row.title.clone()),
        Column::text("Short Name", 140.0, |row: &Color| row.short.clone()),
    ];

    view! { <MasterListPage vm=vm columns=columns search_placeholder="Search by title or short name" /> }
}
