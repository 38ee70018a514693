use contracts::domain::a003_finishing::Finishing;
use leptos::prelude::*;

use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

impl MasterView for Finishing {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![("Title", self.title.clone()), ("Short Name", self.short.clone())]
    }
}

#[component]
pub fn FinishingList() -> impl IntoView {
    let vm = MasterListVm::<Finishing>::new();
    let columns = vec![
        Column::text("Title", 220.0, |row: &Finishing| row.title.clone()),
        Column::text("Short Name", 140.0, |row: &Finishing| row.short.clone()),
    ];

    view! { <MasterListPage vm=vm columns=columns search_placeholder="Search by title or short name" /> }
}
