//! Single-select state → district → location chain of the customer form.

use super::CustomerForm;
use crate::shared::lookup::{DistrictOption, LocationOption};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerCascade {
    pub districts: Vec<DistrictOption>,
    pub locations: Vec<LocationOption>,
}

impl CustomerCascade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state whose districts must be fetched.
    pub fn select_state(&mut self, form: &mut CustomerForm, state_id: Option<i64>) -> Option<i64> {
        if form.state_id != state_id {
            form.district_id = None;
            form.location_id = None;
            self.districts.clear();
            self.locations.clear();
        }
        form.state_id = state_id;
        state_id
    }

    pub fn apply_districts(&mut self, options: Vec<DistrictOption>) {
        self.districts = options;
    }

    /// Returns the district whose locations must be fetched.
    pub fn select_district(
        &mut self,
        form: &mut CustomerForm,
        district_id: Option<i64>,
    ) -> Option<i64> {
        if form.district_id != district_id {
            form.location_id = None;
            self.locations.clear();
        }
        form.district_id = district_id;
        district_id
    }

    pub fn apply_locations(&mut self, options: Vec<LocationOption>) {
        self.locations = options;
    }

    /// Edit mode: both option levels are fetched and the selection kept.
    pub fn prefill(&self, form: &CustomerForm) -> (Option<i64>, Option<i64>) {
        (form.state_id, form.state_id.and(form.district_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CustomerForm {
        CustomerForm {
            state_id: Some(1),
            district_id: Some(10),
            location_id: Some(100),
            ..CustomerForm::default()
        }
    }

    #[test]
    fn test_state_change_clears_lower_levels() {
        let mut cascade = CustomerCascade::new();
        cascade.apply_locations(vec![LocationOption {
            id: 100,
            location_name: "Aundh".into(),
            district_id: Some(10),
        }]);
        let mut form = filled();
        assert_eq!(cascade.select_state(&mut form, Some(2)), Some(2));
        assert_eq!(form.district_id, None);
        assert_eq!(form.location_id, None);
        assert!(cascade.locations.is_empty());
    }

    #[test]
    fn test_district_change_clears_location_only() {
        let mut cascade = CustomerCascade::new();
        let mut form = filled();
        assert_eq!(cascade.select_district(&mut form, Some(11)), Some(11));
        assert_eq!(form.state_id, Some(1));
        assert_eq!(form.location_id, None);
    }

    #[test]
    fn test_same_value_keeps_selection() {
        let mut cascade = CustomerCascade::new();
        let mut form = filled();
        cascade.select_district(&mut form, Some(10));
        assert_eq!(form.location_id, Some(100));
    }

    #[test]
    fn test_prefill_requests_both_levels() {
        let cascade = CustomerCascade::new();
        assert_eq!(cascade.prefill(&filled()), (Some(1), Some(10)));
        assert_eq!(cascade.prefill(&CustomerForm::default()), (None, None));
    }
}
