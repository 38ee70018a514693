use contracts::domain::a010_customer::Customer;
use leptos::prelude::*;

use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

impl MasterView for Customer {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Name", self.name.clone()),
            ("Phone Number", self.phone_no.clone()),
            ("Email", self.email.clone().unwrap_or_default()),
            ("GST Number", self.gstin.clone().unwrap_or_default()),
            ("Brand", self.brand_name().to_string()),
            ("Place", self.place()),
        ];
        if let Some(created_by) = &self.created_by_type_label {
            rows.push(("Created By", created_by.clone()));
        }
        if !self.status {
            if let Some(reason) = &self.inactive_reason_label {
                rows.push(("Inactive Reason", reason.clone()));
            }
        }
        rows
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let vm = MasterListVm::<Customer>::new();

    let columns = vec![
        Column::text("Name", 180.0, |row: &Customer| row.name.clone()),
        Column::text("Phone Number", 130.0, |row: &Customer| row.phone_no.clone()),
        Column::text("Brand", 120.0, |row: &Customer| row.brand_name().to_string()),
        Column::text("Place", 220.0, Customer::place),
    ];

    view! {
        <MasterListPage
            vm=vm
            columns=columns
            search_placeholder="Search by name or phone"
        />
    }
}
