//! Tab titles. Used by the sidebar and when a tab is restored from the URL.

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

use crate::dashboards::HOME_DASHBOARD_KEY;

fn master_label<R: MasterResource>(key: &str) -> Option<String> {
    MasterTab::parse(&R::full_name(), key).map(|tab| match tab {
        MasterTab::List => R::list_name().to_string(),
        MasterTab::New => format!("Add {}", R::element_name()),
        MasterTab::Edit(_) => format!("Edit {}", R::element_name()),
    })
}

/// Readable title for `key`; the key itself when it is unknown.
pub fn tab_label_for_key(key: &str) -> String {
    if key == HOME_DASHBOARD_KEY {
        return "Dashboard".to_string();
    }
    master_label::<DesignType>(key)
        .or_else(|| master_label::<Color>(key))
        .or_else(|| master_label::<Finishing>(key))
        .or_else(|| master_label::<Design>(key))
        .or_else(|| master_label::<Employee>(key))
        .or_else(|| master_label::<Distributor>(key))
        .or_else(|| master_label::<Location>(key))
        .or_else(|| master_label::<Area>(key))
        .or_else(|| master_label::<AreaAssign>(key))
        .or_else(|| master_label::<Customer>(key))
        .or_else(|| master_label::<Brand>(key))
        .or_else(|| master_label::<ShiftTime>(key))
        .or_else(|| master_label::<DoorPartSize>(key))
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_and_form_titles() {
        assert_eq!(tab_label_for_key("a001_design_type"), DesignType::list_name());
        assert_eq!(tab_label_for_key("a008_area_new"), "Add Area");
        assert_eq!(tab_label_for_key("a009_area_assign_edit_3"), "Edit Area Assign");
        assert_eq!(tab_label_for_key(HOME_DASHBOARD_KEY), "Dashboard");
    }

    #[test]
    fn test_unknown_key_is_echoed() {
        assert_eq!(tab_label_for_key("z999_unknown"), "z999_unknown");
    }
}
