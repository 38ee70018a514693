use contracts::domain::a006_distributor::Distributor;
use leptos::prelude::*;

use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

impl MasterView for Distributor {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Phone Number", self.phone_no.clone()),
            ("Email", self.email.clone()),
            ("Address", self.address.clone().unwrap_or_default()),
        ]
    }
}

#[component]
pub fn DistributorList() -> impl IntoView {
    let vm = MasterListVm::<Distributor>::new();
    let columns = vec![
        Column::text("Name", 200.0, |row: &Distributor| row.name.clone()),
        Column::text("Phone Number", 140.0, |row: &Distributor| row.phone_no.clone()),
        Column::text("Email", 200.0, |row: &Distributor| row.email.clone()),
    ];

    view! { <MasterListPage vm=vm columns=columns search_placeholder="Search by name, phone or email" /> }
}
