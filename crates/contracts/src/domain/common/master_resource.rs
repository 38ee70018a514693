use serde::{de::DeserializeOwned, Serialize};

use super::MasterForm;

/// A master record served by a REST resource.
///
/// Every resource exposes the same set of endpoints:
/// list, show, edit, create, update and change-status.
pub trait MasterResource:
    Clone + PartialEq + DeserializeOwned + Serialize + Send + Sync + 'static
{
    /// Form DTO used by the add and edit screens
    type Form: MasterForm;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> i64;

    fn is_active(&self) -> bool;

    /// Main human-readable field, used in tab titles and confirmations
    fn display_name(&self) -> String;

    /// Raw `created_at` timestamp as sent by the server
    fn created_at(&self) -> Option<&str> {
        None
    }

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the resource in the console (for example "a001")
    fn aggregate_index() -> &'static str;

    /// Snake-case name (for example "design_type")
    fn collection_name() -> &'static str;

    /// REST path segment (for example "design-type")
    fn resource_path() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    // ============================================================================
    // Defaults
    // ============================================================================

    /// Tab key of the list screen (for example "a001_design_type")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    fn new_tab_key() -> String {
        format!("{}_new", Self::full_name())
    }

    fn edit_tab_key(id: i64) -> String {
        format!("{}_edit_{}", Self::full_name(), id)
    }

    fn item_path(id: i64) -> String {
        format!("{}/{}", Self::resource_path(), id)
    }

    fn edit_path(id: i64) -> String {
        format!("{}/{}/edit", Self::resource_path(), id)
    }

    fn status_path(id: i64) -> String {
        format!("{}/change-status/{}", Self::resource_path(), id)
    }
}

/// Parsed tab key of a master screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MasterTab {
    List,
    New,
    Edit(i64),
}

impl MasterTab {
    /// Match `key` against the tab keys of resource `full_name`.
    pub fn parse(full_name: &str, key: &str) -> Option<Self> {
        let rest = key.strip_prefix(full_name)?;
        match rest {
            "" => Some(MasterTab::List),
            "_new" => Some(MasterTab::New),
            _ => rest
                .strip_prefix("_edit_")
                .and_then(|id| id.parse().ok())
                .map(MasterTab::Edit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_master_tab_keys() {
        assert_eq!(MasterTab::parse("a008_area", "a008_area"), Some(MasterTab::List));
        assert_eq!(MasterTab::parse("a008_area", "a008_area_new"), Some(MasterTab::New));
        assert_eq!(
            MasterTab::parse("a008_area", "a008_area_edit_42"),
            Some(MasterTab::Edit(42))
        );
        assert_eq!(MasterTab::parse("a008_area", "a008_area_edit_x"), None);
        assert_eq!(MasterTab::parse("a008_area", "a009_area_assign"), None);
    }

    #[test]
    fn test_prefix_collision_is_rejected() {
        // "a008_area" must not claim keys of a longer name sharing its prefix
        assert_eq!(MasterTab::parse("a008_area", "a008_area_assign"), None);
    }
}
