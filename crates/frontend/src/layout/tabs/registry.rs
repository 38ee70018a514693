//! Tab key → view. Every screen reachable from the sidebar or a list is
//! listed here.

use contracts::domain::a001_design_type::DesignType;
use contracts::domain::a002_color::Color;
use contracts::domain::a003_finishing::Finishing;
use contracts::domain::a004_design::Design;
use contracts::domain::a005_employee::Employee;
use contracts::domain::a006_distributor::Distributor;
use contracts::domain::a007_location::Location;
use contracts::domain::a008_area::Area;
use contracts::domain::a009_area_assign::AreaAssign;
use contracts::domain::a010_customer::Customer;
use contracts::domain::a011_brand::Brand;
use contracts::domain::a012_shift_time::ShiftTime;
use contracts::domain::a013_door_part_size::DoorPartSize;
use contracts::domain::common::{MasterResource, MasterTab};
use leptos::prelude::*;

use crate::dashboards::{HomeDashboard, HOME_DASHBOARD_KEY};
use crate::domain::a001_design_type::ui::{details::DesignTypeDetails, list::DesignTypeList};
use crate::domain::a002_color::ui::{details::ColorDetails, list::ColorList};
use crate::domain::a003_finishing::ui::{details::FinishingDetails, list::FinishingList};
use crate::domain::a004_design::ui::{details::DesignDetails, list::DesignList};
use crate::domain::a005_employee::ui::{details::EmployeeDetails, list::EmployeeList};
use crate::domain::a006_distributor::ui::{details::DistributorDetails, list::DistributorList};
use crate::domain::a007_location::ui::{details::LocationDetails, list::LocationList};
use crate::domain::a008_area::ui::{details::AreaDetails, list::AreaList};
use crate::domain::a009_area_assign::ui::{details::AreaAssignDetails, list::AreaAssignList};
use crate::domain::a010_customer::ui::{details::CustomerDetails, list::CustomerList};
use crate::domain::a011_brand::ui::{details::BrandDetails, list::BrandList};
use crate::domain::a012_shift_time::ui::{details::ShiftTimeDetails, list::ShiftTimeList};
use crate::domain::a013_door_part_size::ui::{details::DoorPartSizeDetails, list::DoorPartSizeList};

/// List, add and edit screens of resource `R`, when `key` is one of its tabs.
fn master_screen<R: MasterResource>(
    key: &str,
    list: fn() -> AnyView,
    details: fn(Option<i64>) -> AnyView,
) -> Option<AnyView> {
    MasterTab::parse(&R::full_name(), key).map(|tab| match tab {
        MasterTab::List => list(),
        MasterTab::New => details(None),
        MasterTab::Edit(id) => details(Some(id)),
    })
}

pub fn render_tab_content(key: &str) -> AnyView {
    if key == HOME_DASHBOARD_KEY {
        return view! { <HomeDashboard /> }.into_any();
    }

    master_screen::<DesignType>(
        key,
        || view! { <DesignTypeList /> }.into_any(),
        |id| view! { <DesignTypeDetails id=id /> }.into_any(),
    )
    .or_else(|| {
        master_screen::<Color>(
            key,
            || view! { <ColorList /> }.into_any(),
            |id| view! { <ColorDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<Finishing>(
            key,
            || view! { <FinishingList /> }.into_any(),
            |id| view! { <FinishingDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<Design>(
            key,
            || view! { <DesignList /> }.into_any(),
            |id| view! { <DesignDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<Employee>(
            key,
            || view! { <EmployeeList /> }.into_any(),
            |id| view! { <EmployeeDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<Distributor>(
            key,
            || view! { <DistributorList /> }.into_any(),
            |id| view! { <DistributorDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<Location>(
            key,
            || view! { <LocationList /> }.into_any(),
            |id| view! { <LocationDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<Area>(
            key,
            || view! { <AreaList /> }.into_any(),
            |id| view! { <AreaDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<AreaAssign>(
            key,
            || view! { <AreaAssignList /> }.into_any(),
            |id| view! { <AreaAssignDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<Customer>(
            key,
            || view! { <CustomerList /> }.into_any(),
            |id| view! { <CustomerDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<Brand>(
            key,
            || view! { <BrandList /> }.into_any(),
            |id| view! { <BrandDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<ShiftTime>(
            key,
            || view! { <ShiftTimeList /> }.into_any(),
            |id| view! { <ShiftTimeDetails id=id /> }.into_any(),
        )
    })
    .or_else(|| {
        master_screen::<DoorPartSize>(
            key,
            || view! { <DoorPartSizeList /> }.into_any(),
            |id| view! { <DoorPartSizeDetails id=id /> }.into_any(),
        )
    })
    .unwrap_or_else(|| {
        log::warn!("unknown tab key '{}'", key);
        view! { <div class="placeholder">"Page not found"</div> }.into_any()
    })
}
