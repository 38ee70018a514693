use contracts::domain::a011_brand::Brand;
use leptos::prelude::*;

use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

impl MasterView for Brand {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![("Brand Name", self.name.clone())]
    }
}

#[component]
pub fn BrandList() -> impl IntoView {
    let vm = MasterListVm::<Brand>::new();
    let columns = vec![Column::text("Brand Name", 260.0, |row: &Brand| row.name.clone())];

    view! { <MasterListPage vm=vm columns=columns search_placeholder="Search by brand name" /> }
}
