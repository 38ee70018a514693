//! State → district → location cascade of the area form.
//!
//! The cascade never touches the network. Every step mutates the form and the
//! option lists, then returns a [`CascadeEffect`] naming the data the view must
//! fetch (or the question it must ask) before calling the next step.
//!
//! ```text
//! select_state ──► FetchDistricts ──► apply_districts
//! set_districts ─┬─► RefetchLocations ──► apply_refetched_locations ─┐
//!                └─► ConfirmAddAll ◄─────────────────────────────────┘ (if districts were also added)
//! ConfirmAddAll ──► answer_add_all ──► FetchLocationsPerDistrict ──► apply_added_locations
//! prefill ──► FetchDistricts ──► apply_districts ──► prefill_locations ──► FetchLocations ──► apply_prefill_locations
//! ```

use super::AreaForm;
use crate::shared::lookup::{DistrictOption, LocationOption};

/// What the view has to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeEffect {
    Nothing,
    /// `GET common/get-districts-from-location/{state}`
    FetchDistricts(i64),
    /// `POST common/get-locations-by-districts` for the remaining districts,
    /// then `apply_refetched_locations`.
    RefetchLocations(Vec<i64>),
    /// Ask "Add all locations?" for each district, then `answer_add_all`.
    ConfirmAddAll(Vec<i64>),
    /// One `get-locations-by-districts` call per district, then
    /// `apply_added_locations`.
    FetchLocationsPerDistrict(Vec<i64>),
    /// Edit-mode prefill of the location options, then `apply_prefill_locations`.
    FetchLocations(Vec<i64>),
}

/// How a new district selection differs from the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistrictChange {
    Unchanged,
    Removed { removed: Vec<i64> },
    Added { added: Vec<i64> },
    /// Same size, different members: a removal followed by an addition.
    Replaced { removed: Vec<i64>, added: Vec<i64> },
}

impl DistrictChange {
    pub fn classify(previous: &[i64], next: &[i64]) -> Self {
        let removed: Vec<i64> = previous.iter().copied().filter(|d| !next.contains(d)).collect();
        let added: Vec<i64> = next.iter().copied().filter(|d| !previous.contains(d)).collect();
        match (removed.is_empty(), added.is_empty()) {
            (true, true) => DistrictChange::Unchanged,
            (false, true) => DistrictChange::Removed { removed },
            (true, false) => DistrictChange::Added { added },
            (false, false) => DistrictChange::Replaced { removed, added },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaCascade {
    pub districts: Vec<DistrictOption>,
    pub locations: Vec<LocationOption>,
    /// Districts added by the last selection change whose locations are not merged yet
    pending_added: Vec<i64>,
}

impl AreaCascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_added(&self) -> &[i64] {
        &self.pending_added
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn select_state(&mut self, form: &mut AreaForm, state_id: Option<i64>) -> CascadeEffect {
        form.state_id = state_id;
        form.district_ids.clear();
        form.location_ids.clear();
        form.is_all_location.clear();
        self.districts.clear();
        self.locations.clear();
        self.pending_added.clear();

        match state_id {
            Some(id) => CascadeEffect::FetchDistricts(id),
            None => CascadeEffect::Nothing,
        }
    }

    pub fn apply_districts(&mut self, options: Vec<DistrictOption>) {
        self.districts = options;
    }

    // ------------------------------------------------------------------
    // Districts
    // ------------------------------------------------------------------

    pub fn set_districts(&mut self, form: &mut AreaForm, selected: Vec<i64>) -> CascadeEffect {
        let selected = dedup(selected);
        let change = DistrictChange::classify(&form.district_ids, &selected);
        form.district_ids = selected.clone();

        let (removed, added) = match change {
            DistrictChange::Unchanged => return CascadeEffect::Nothing,
            DistrictChange::Removed { removed } => (removed, Vec::new()),
            DistrictChange::Added { added } => (Vec::new(), added),
            DistrictChange::Replaced { removed, added } => (removed, added),
        };

        for district in &removed {
            form.is_all_location.remove(district);
        }
        self.pending_added = added;

        if removed.is_empty() {
            return CascadeEffect::ConfirmAddAll(self.pending_added.clone());
        }

        if selected.is_empty() {
            self.locations.clear();
            form.location_ids.clear();
            self.pending_added.clear();
            return CascadeEffect::Nothing;
        }

        CascadeEffect::RefetchLocations(selected)
    }

    /// Options for the districts that are still selected. Selected locations
    /// outside them are dropped.
    pub fn apply_refetched_locations(
        &mut self,
        form: &mut AreaForm,
        options: Vec<LocationOption>,
    ) -> CascadeEffect {
        form.location_ids
            .retain(|id| options.iter().any(|o| o.id == *id));
        self.locations = options;

        if self.pending_added.is_empty() {
            CascadeEffect::Nothing
        } else {
            CascadeEffect::ConfirmAddAll(self.pending_added.clone())
        }
    }

    /// Record the "Add all locations?" answers for the pending districts.
    pub fn answer_add_all(&mut self, form: &mut AreaForm, answers: &[(i64, bool)]) -> CascadeEffect {
        for district in &self.pending_added {
            let yes = answers
                .iter()
                .find(|(d, _)| d == district)
                .map(|(_, yes)| *yes)
                .unwrap_or(false);
            form.is_all_location.insert(*district, yes);
        }

        if self.pending_added.is_empty() {
            CascadeEffect::Nothing
        } else {
            CascadeEffect::FetchLocationsPerDistrict(self.pending_added.clone())
        }
    }

    /// Merge the newly added districts' locations into the options. Districts
    /// answered "yes" get all of their locations selected.
    pub fn apply_added_locations(
        &mut self,
        form: &mut AreaForm,
        per_district: Vec<(i64, Vec<LocationOption>)>,
    ) {
        let mut selected = std::mem::take(&mut form.location_ids);

        for (district, options) in per_district {
            if !form.district_ids.contains(&district) {
                // deselected while the request was in flight
                continue;
            }
            let add_all = form.is_all_location.get(&district).copied().unwrap_or(false);
            for option in options {
                if add_all {
                    selected.push(option.id);
                }
                if !self.locations.iter().any(|existing| existing.id == option.id) {
                    self.locations.push(option);
                }
            }
        }

        form.location_ids = dedup(selected);
        self.pending_added.clear();
    }

    // ------------------------------------------------------------------
    // Locations
    // ------------------------------------------------------------------

    pub fn set_locations(&mut self, form: &mut AreaForm, selected: Vec<i64>) {
        form.location_ids = dedup(selected);
    }

    // ------------------------------------------------------------------
    // Edit-mode prefill
    // ------------------------------------------------------------------

    /// First step after loading an existing area. Selections are kept.
    pub fn prefill(&mut self, form: &AreaForm) -> CascadeEffect {
        self.pending_added.clear();
        match form.state_id {
            Some(id) => CascadeEffect::FetchDistricts(id),
            None => CascadeEffect::Nothing,
        }
    }

    pub fn prefill_locations(&self, form: &AreaForm) -> CascadeEffect {
        if form.district_ids.is_empty() {
            CascadeEffect::Nothing
        } else {
            CascadeEffect::FetchLocations(form.district_ids.clone())
        }
    }

    pub fn apply_prefill_locations(&mut self, options: Vec<LocationOption>) {
        self.locations = options;
    }
}

fn dedup(ids: Vec<i64>) -> Vec<i64> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(id: i64, district: i64) -> LocationOption {
        LocationOption {
            id,
            location_name: format!("L{}", id),
            district_id: Some(district),
        }
    }

    fn district(id: i64) -> DistrictOption {
        DistrictOption {
            id,
            name: format!("D{}", id),
        }
    }

    /// Form with state 1, districts 10 and 20, location options 101, 102, 201.
    fn loaded() -> (AreaCascade, AreaForm) {
        let mut cascade = AreaCascade::new();
        let mut form = AreaForm::default();
        assert_eq!(cascade.select_state(&mut form, Some(1)), CascadeEffect::FetchDistricts(1));
        cascade.apply_districts(vec![district(10), district(20), district(30)]);

        assert_eq!(
            cascade.set_districts(&mut form, vec![10]),
            CascadeEffect::ConfirmAddAll(vec![10])
        );
        assert_eq!(
            cascade.answer_add_all(&mut form, &[(10, true)]),
            CascadeEffect::FetchLocationsPerDistrict(vec![10])
        );
        cascade.apply_added_locations(&mut form, vec![(10, vec![loc(101, 10), loc(102, 10)])]);

        assert_eq!(
            cascade.set_districts(&mut form, vec![10, 20]),
            CascadeEffect::ConfirmAddAll(vec![20])
        );
        cascade.answer_add_all(&mut form, &[(20, false)]);
        cascade.apply_added_locations(&mut form, vec![(20, vec![loc(201, 20)])]);
        (cascade, form)
    }

    #[test]
    fn test_add_all_selects_district_locations() {
        let (cascade, form) = loaded();
        assert_eq!(form.location_ids, vec![101, 102]);
        assert_eq!(
            cascade.locations.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![101, 102, 201]
        );
        assert_eq!(form.is_all_location.get(&10), Some(&true));
        assert_eq!(form.is_all_location.get(&20), Some(&false));
        assert!(cascade.pending_added().is_empty());
    }

    #[test]
    fn test_state_change_resets_everything() {
        let (mut cascade, mut form) = loaded();
        assert_eq!(cascade.select_state(&mut form, Some(2)), CascadeEffect::FetchDistricts(2));
        assert!(form.district_ids.is_empty());
        assert!(form.location_ids.is_empty());
        assert!(form.is_all_location.is_empty());
        assert!(cascade.districts.is_empty());
        assert!(cascade.locations.is_empty());

        assert_eq!(cascade.select_state(&mut form, None), CascadeEffect::Nothing);
    }

    #[test]
    fn test_removing_district_refetches_and_filters() {
        let (mut cascade, mut form) = loaded();
        cascade.set_locations(&mut form, vec![101, 201]);

        assert_eq!(
            cascade.set_districts(&mut form, vec![20]),
            CascadeEffect::RefetchLocations(vec![20])
        );
        assert!(!form.is_all_location.contains_key(&10));

        let next = cascade.apply_refetched_locations(&mut form, vec![loc(201, 20)]);
        assert_eq!(next, CascadeEffect::Nothing);
        assert_eq!(form.location_ids, vec![201]);
        assert_eq!(cascade.locations.len(), 1);
    }

    #[test]
    fn test_removing_last_district_clears_without_fetch() {
        let (mut cascade, mut form) = loaded();
        assert_eq!(cascade.set_districts(&mut form, vec![]), CascadeEffect::Nothing);
        assert!(form.location_ids.is_empty());
        assert!(cascade.locations.is_empty());
    }

    #[test]
    fn test_replacing_district_is_removal_then_addition() {
        let (mut cascade, mut form) = loaded();
        assert_eq!(
            cascade.set_districts(&mut form, vec![10, 30]),
            CascadeEffect::RefetchLocations(vec![10, 30])
        );
        let next = cascade.apply_refetched_locations(
            &mut form,
            vec![loc(101, 10), loc(102, 10), loc(301, 30)],
        );
        assert_eq!(next, CascadeEffect::ConfirmAddAll(vec![30]));
        assert_eq!(
            cascade.answer_add_all(&mut form, &[(30, true)]),
            CascadeEffect::FetchLocationsPerDistrict(vec![30])
        );
        cascade.apply_added_locations(&mut form, vec![(30, vec![loc(301, 30), loc(302, 30)])]);

        assert_eq!(form.location_ids, vec![101, 102, 301, 302]);
        // 301 arrived twice and is listed once
        assert_eq!(
            cascade.locations.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![101, 102, 301, 302]
        );
    }

    #[test]
    fn test_unanswered_district_defaults_to_no() {
        let (mut cascade, mut form) = loaded();
        cascade.set_districts(&mut form, vec![10, 20, 30]);
        cascade.answer_add_all(&mut form, &[]);
        assert_eq!(form.is_all_location.get(&30), Some(&false));
    }

    #[test]
    fn test_late_locations_for_deselected_district_are_ignored() {
        let (mut cascade, mut form) = loaded();
        cascade.set_districts(&mut form, vec![10, 20, 30]);
        cascade.answer_add_all(&mut form, &[(30, true)]);
        // user removed 30 before the response arrived
        form.district_ids.retain(|d| *d != 30);
        cascade.apply_added_locations(&mut form, vec![(30, vec![loc(301, 30)])]);
        assert!(!form.location_ids.contains(&301));
    }

    #[test]
    fn test_duplicate_selection_is_collapsed() {
        let (mut cascade, mut form) = loaded();
        cascade.set_locations(&mut form, vec![101, 101, 102]);
        assert_eq!(form.location_ids, vec![101, 102]);
        assert_eq!(cascade.set_districts(&mut form, vec![10, 20, 20]), CascadeEffect::Nothing);
    }

    #[test]
    fn test_prefill_keeps_selection() {
        let mut cascade = AreaCascade::new();
        let form = AreaForm {
            state_id: Some(1),
            district_ids: vec![10],
            location_ids: vec![101],
            ..AreaForm::default()
        };
        assert_eq!(cascade.prefill(&form), CascadeEffect::FetchDistricts(1));
        cascade.apply_districts(vec![district(10)]);
        assert_eq!(cascade.prefill_locations(&form), CascadeEffect::FetchLocations(vec![10]));
        cascade.apply_prefill_locations(vec![loc(101, 10), loc(102, 10)]);
        assert_eq!(form.location_ids, vec![101]);
        assert_eq!(cascade.locations.len(), 2);
    }

    #[test]
    fn test_classify() {
        assert_eq!(DistrictChange::classify(&[1, 2], &[2, 1]), DistrictChange::Unchanged);
        assert_eq!(
            DistrictChange::classify(&[1, 2], &[2]),
            DistrictChange::Removed { removed: vec![1] }
        );
        assert_eq!(
            DistrictChange::classify(&[1], &[1, 3]),
            DistrictChange::Added { added: vec![3] }
        );
        assert_eq!(
            DistrictChange::classify(&[1, 2], &[1, 3]),
            DistrictChange::Replaced {
                removed: vec![2],
                added: vec![3]
            }
        );
    }
}
