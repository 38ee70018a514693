use contracts::domain::a005_employee::{Employee, EmployeeStatusChange};
use contracts::domain::common::MasterResource;
use contracts::shared::lookup::{endpoints, keyed_pairs};
use contracts::shared::status;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::dialogs::{choose, confirm};
use crate::shared::lookup_api;
use crate::shared::master::{Column, MasterListPage, MasterListVm, MasterView};

fn designation_text(row: &Employee) -> String {
    row.designation_label
        .clone()
        .or_else(|| row.designation.clone())
        .unwrap_or_default()
}

impl MasterView for Employee {
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Name", self.name.clone()),
            ("Phone Number", self.phone_no.clone()),
            ("Email", self.email.clone()),
            ("Address", self.address.clone().unwrap_or_default()),
            ("Designation", designation_text(self)),
        ];
        if let Some(reason) = self.inactive_reason_label.clone().filter(|_| !self.status) {
            rows.push(("Inactive Reason", reason));
        }
        rows
    }
}

/// Confirm, then ask for a reason when deactivating.
async fn change_status(vm: MasterListVm<Employee>, row: Employee) {
    let prompt = status::change_prompt(Employee::element_name(), row.status);
    if !confirm(vm.modal(), "Are you sure?", prompt).await {
        return;
    }

    let body = if EmployeeStatusChange::needs_reason(row.status) {
        let reasons = match lookup_api::keyed(endpoints::EMPLOYEE_INACTIVE_REASONS).await {
            Ok(reasons) => keyed_pairs(&reasons),
            Err(err) => {
                vm.toast().api_error(&err, "Failed to load reasons");
                return;
            }
        };
        let picked = choose(
            vm.modal(),
            "Reason for deactivation",
            reasons,
            "Select reason",
            EmployeeStatusChange::deactivate,
        )
        .await;
        match picked {
            Some(body) => body,
            None => return,
        }
    } else {
        EmployeeStatusChange::activate()
    };

    vm.send_status_change(row.id, body).await;
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let vm = MasterListVm::<Employee>::new();
    let on_toggle_status = Callback::new(move |row: Employee| spawn_local(change_status(vm, row)));

    let columns = vec![
        Column::text("Name", 180.0, |row: &Employee| row.name.clone()),
        Column::text("Phone Number", 130.0, |row: &Employee| row.phone_no.clone()),
        Column::text("Email", 200.0, |row: &Employee| row.email.clone()),
        Column::text("Designation", 150.0, designation_text),
    ];

    view! {
        <MasterListPage
            vm=vm
            columns=columns
            on_toggle_status=on_toggle_status
            search_placeholder="Search by name, phone or email"
        />
    }
}
