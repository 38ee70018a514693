use contracts::domain::a001_design_type::DesignType;
use leptos::prelude::*;

use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

impl MasterView for DesignType {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![("Title", self.title.clone()), ("Short Name", self.short.clone())]
    }
}

#[component]
pub fn DesignTypeList() -> impl IntoView {
    let vm = MasterListVm::<DesignType>::new();
    let columns = vec![
        Column::text("Title", 220.0, |row: &DesignType| row.title.clone()),
        Column::text("Short Name", 140.0, |row: &DesignType| row.short.clone()),
    ];

    view! { <MasterListPage vm=vm columns=columns search_placeholder="Search by title or short name" /> }
}
