use contracts::domain::a008_area::{Area, AreaCascade, AreaForm, CascadeEffect};
use contracts::shared::lookup::LocationOption;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::dialogs::confirm;
use crate::shared::lookup_api;
use crate::shared::master::MasterFormVm;
use crate::shared::modal_stack::{use_modal_stack, ModalStackService};

/// Counter of user steps. Async work remembers the value it started under.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct StepGeneration(u32);

impl StepGeneration {
    fn advance(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    fn is_current(&self, generation: u32) -> bool {
        self.0 == generation
    }
}

/// Runs the effects requested by [`AreaCascade`] and feeds the results back.
///
/// Every user step bumps `generation`; a response that arrives after a newer
/// step is dropped.
#[derive(Clone, Copy)]
pub struct AreaCascadeVm {
    form: MasterFormVm<Area>,
    pub cascade: RwSignal<AreaCascade>,
    generation: StoredValue<StepGeneration>,
    modal: ModalStackService,
}

impl AreaCascadeVm {
    pub fn new(form: MasterFormVm<Area>) -> Self {
        Self {
            form,
            cascade: RwSignal::new(AreaCascade::new()),
            generation: StoredValue::new(StepGeneration::default()),
            modal: use_modal_stack(),
        }
    }

    fn next_generation(&self) -> u32 {
        let mut next = 0;
        self.generation.update_value(|g| next = g.advance());
        next
    }

    fn is_current(&self, generation: u32) -> bool {
        self.generation.with_value(|g| g.is_current(generation))
    }

    /// Apply one cascade transition to the form and return its effect.
    fn step(
        &self,
        field: &'static str,
        transition: impl FnOnce(&mut AreaCascade, &mut AreaForm) -> CascadeEffect,
    ) -> CascadeEffect {
        let mut cascade = self.cascade.get_untracked();
        let mut effect = CascadeEffect::Nothing;
        self.form.set(field, |form| effect = transition(&mut cascade, form));
        self.cascade.set(cascade);
        effect
    }

    pub fn select_state(&self, state_id: Option<i64>) {
        let effect = self.step("state_id", |c, f| c.select_state(f, state_id));
        self.spawn(effect);
    }

    pub fn set_districts(&self, district_ids: Vec<i64>) {
        let effect = self.step("district_ids", |c, f| c.set_districts(f, district_ids));
        self.spawn(effect);
    }

    pub fn set_locations(&self, location_ids: Vec<i64>) {
        self.step("location_ids", |c, f| {
            c.set_locations(f, location_ids);
            CascadeEffect::Nothing
        });
    }

    /// Edit mode and reset: reload both option levels, keep the selection.
    pub fn prefill(&self, form: AreaForm) {
        let generation = self.next_generation();
        let vm = *self;
        let effect = {
            let mut cascade = AreaCascade::new();
            let effect = cascade.prefill(&form);
            self.cascade.set(cascade);
            effect
        };
        spawn_local(async move {
            vm.perform(effect, generation).await;
            if !vm.is_current(generation) {
                return;
            }
            let locations = vm.cascade.with_untracked(|c| c.prefill_locations(&form));
            vm.perform(locations, generation).await;
        });
    }

    fn spawn(&self, effect: CascadeEffect) {
        if effect == CascadeEffect::Nothing {
            return;
        }
        let generation = self.next_generation();
        let vm = *self;
        spawn_local(async move { vm.perform(effect, generation).await });
    }

    async fn fetch_locations(&self, district_ids: Vec<i64>) -> Option<Vec<LocationOption>> {
        match lookup_api::locations_by_districts(district_ids).await {
            Ok(options) => Some(options),
            Err(err) => {
                self.form.toast().api_error(&err, "Failed to load locations");
                None
            }
        }
    }

    async fn perform(&self, effect: CascadeEffect, generation: u32) {
        let mut effect = effect;
        loop {
            if !self.is_current(generation) {
                log::debug!("dropping stale area cascade step {:?}", effect);
                return;
            }
            effect = match effect {
                CascadeEffect::Nothing => return,

                CascadeEffect::FetchDistricts(state_id) => {
                    match lookup_api::districts_with_locations(state_id).await {
                        Ok(options) if self.is_current(generation) => {
                            self.cascade.update(|c| c.apply_districts(options));
                        }
                        Ok(_) => {}
                        Err(err) => self.form.toast().api_error(&err, "Failed to load districts"),
                    }
                    CascadeEffect::Nothing
                }

                CascadeEffect::RefetchLocations(district_ids) => {
                    let Some(options) = self.fetch_locations(district_ids).await else {
                        return;
                    };
                    if !self.is_current(generation) {
                        return;
                    }
                    self.step("location_ids", |c, f| c.apply_refetched_locations(f, options))
                }

                CascadeEffect::ConfirmAddAll(added) => {
                    let mut answers = Vec::with_capacity(added.len());
                    for district_id in added {
                        let name = self.cascade.with_untracked(|c| {
                            c.districts
                                .iter()
                                .find(|d| d.id == district_id)
                                .map(|d| d.name.clone())
                                .unwrap_or_default()
                        });
                        let yes = confirm(
                            self.modal,
                            "Add all locations?",
                            format!("Do you want to add all locations of {}?", name),
                        )
                        .await;
                        answers.push((district_id, yes));
                    }
                    if !self.is_current(generation) {
                        log::debug!("dropping add-all answers of a superseded district change");
                        return;
                    }
                    self.step("location_ids", |c, f| c.answer_add_all(f, &answers))
                }

                CascadeEffect::FetchLocationsPerDistrict(district_ids) => {
                    let mut per_district = Vec::with_capacity(district_ids.len());
                    for district_id in district_ids {
                        if let Some(options) = self.fetch_locations(vec![district_id]).await {
                            per_district.push((district_id, options));
                        }
                    }
                    if !self.is_current(generation) {
                        return;
                    }
                    self.step("location_ids", |c, f| {
                        c.apply_added_locations(f, per_district);
                        CascadeEffect::Nothing
                    })
                }

                CascadeEffect::FetchLocations(district_ids) => {
                    if let Some(options) = self.fetch_locations(district_ids).await {
                        if self.is_current(generation) {
                            self.cascade.update(|c| c.apply_prefill_locations(options));
                        }
                    }
                    CascadeEffect::Nothing
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_step_supersedes_pending_answers() {
        let mut generation = StepGeneration::default();
        let confirm_started = generation.advance();
        assert!(generation.is_current(confirm_started));
        // districts changed again while the dialog was open
        let newer = generation.advance();
        assert!(!generation.is_current(confirm_started));
        assert!(generation.is_current(newer));
    }
}
