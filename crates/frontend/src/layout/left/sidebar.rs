//! Sidebar with collapsible menu groups

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
use contracts::domain::common::MasterResource;
use leptos::prelude::*;

use crate::dashboards::HOME_DASHBOARD_KEY;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: String,
    label: String,
    icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn item<R: MasterResource>(icon: &'static str) -> MenuItem {
    MenuItem {
        key: R::full_name(),
        label: R::list_name().to_string(),
        icon,
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: HOME_DASHBOARD_KEY,
            label: "Dashboard",
            icon: "dashboard",
            items: vec![],
        },
        MenuGroup {
            id: "masters",
            label: "Masters",
            icon: "masters",
            items: vec![
                item::<DesignType>("door"),
                item::<Color>("palette"),
                item::<Finishing>("palette"),
                item::<Design>("door"),
                item::<Location>("map-pin"),
                item::<Area>("map"),
                item::<AreaAssign>("map"),
                item::<Distributor>("truck"),
                item::<Brand>("tag"),
                item::<ShiftTime>("clock"),
                item::<DoorPartSize>("ruler"),
            ],
        },
        MenuGroup {
            id: "hrm",
            label: "HRM",
            icon: "hrm",
            items: vec![item::<Employee>("users")],
        },
        MenuGroup {
            id: "crm",
            label: "CRM",
            icon: "crm",
            items: vec![item::<Customer>("customers")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let expanded_groups = RwSignal::new(vec!["masters".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let has_children = !group.items.is_empty();
                let group_id = group.id;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children && ctx.active.with(|a| a.as_deref() == Some(group_id))
                            }
                            on:click=move |_| {
                                if has_children {
                                    expanded_groups.update(|items| {
                                        match items.iter().position(|x| x == group_id) {
                                            Some(pos) => { items.remove(pos); }
                                            None => items.push(group_id.to_string()),
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group_id, &tab_label_for_key(group_id));
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|g| g.iter().any(|x| x == group_id))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let items = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.with(|g| g.iter().any(|x| x == group_id))>
                                    <div class="app-sidebar__children">
                                        {items.get_value().into_iter().map(|entry| {
                                            let key = StoredValue::new(entry.key.clone());
                                            let label = StoredValue::new(entry.label.clone());
                                            view! {
                                                <div
                                                    class="app-sidebar__item app-sidebar__item--child"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|a| key.with_value(|k| a.as_deref() == Some(k.as_str())))
                                                    }
                                                    on:click=move |_| {
                                                        ctx.open_tab(&key.get_value(), &label.get_value());
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(entry.icon)}
                                                        <span>{entry.label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_opens_a_known_tab() {
        for group in get_menu_groups() {
            for entry in group.items {
                assert_eq!(tab_label_for_key(&entry.key), entry.label);
            }
        }
    }

    #[test]
    fn test_employee_and_customer_have_own_groups() {
        let groups = get_menu_groups();
        let hrm = groups.iter().find(|g| g.id == "hrm").unwrap();
        assert_eq!(hrm.items[0].key, Employee::full_name());
        let crm = groups.iter().find(|g| g.id == "crm").unwrap();
        assert_eq!(crm.items[0].key, Customer::full_name());
    }
}
