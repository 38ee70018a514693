//! Fetchers for the `common/*` option endpoints.

use contracts::shared::api::{ApiError, ItemResponse};
use contracts::shared::lookup::{
    endpoints, AreaOption, DistrictOption, KeyedOptions, LocationOption,
    LocationsByDistrictsRequest, NamedOption, StateOption, TitledOption,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use super::api_client;
use super::toast::ToastService;

pub async fn states() -> Result<Vec<StateOption>, ApiError> {
    api_client::get_data(endpoints::STATES).await
}

/// States that have at least one location.
pub async fn states_with_locations() -> Result<Vec<StateOption>, ApiError> {
    api_client::get_data(endpoints::STATES_FROM_LOCATION).await
}

pub async fn districts(state_id: i64) -> Result<Vec<DistrictOption>, ApiError> {
    api_client::get_data(&endpoints::districts(state_id)).await
}

/// Districts of `state_id` that have at least one location.
pub async fn districts_with_locations(state_id: i64) -> Result<Vec<DistrictOption>, ApiError> {
    api_client::get_data(&endpoints::districts_from_location(state_id)).await
}

pub async fn locations_by_districts(
    district_ids: Vec<i64>,
) -> Result<Vec<LocationOption>, ApiError> {
    let body = LocationsByDistrictsRequest { district_ids };
    api_client::post_json::<_, ItemResponse<Vec<LocationOption>>>(
        endpoints::LOCATIONS_BY_DISTRICTS,
        &body,
    )
    .await
    .map(|envelope| envelope.data)
}

/// Key → label maps (designations, area types, shift types, reasons, door parts).
pub async fn keyed(endpoint: &str) -> Result<KeyedOptions, ApiError> {
    api_client::get_data(endpoint).await
}

/// Design types, colors, finishings.
pub async fn titled(endpoint: &str) -> Result<Vec<TitledOption>, ApiError> {
    api_client::get_data(endpoint).await
}

/// Brands, sales executives, distributors.
pub async fn named(endpoint: &str) -> Result<Vec<NamedOption>, ApiError> {
    api_client::get_data(endpoint).await
}

pub async fn areas(assign_type: &str) -> Result<Vec<AreaOption>, ApiError> {
    api_client::get_data(&endpoints::areas(assign_type)).await
}

/// `(value, label)` pairs for a `Select`.
pub type Pairs = Vec<(String, String)>;

/// Fetch in the background and store the result as select pairs.
/// Failures are toasted and leave `target` untouched.
pub fn load_options<T, Fut>(
    target: RwSignal<Pairs>,
    fetch: Fut,
    to_pairs: impl FnOnce(&T) -> Pairs + 'static,
    toast: ToastService,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    load_options_while(target, fetch, to_pairs, || true, toast);
}

/// Like [`load_options`] for options that depend on another field. The reply
/// is dropped when `still_wanted` says the selection moved on meanwhile.
pub fn load_options_while<T, Fut>(
    target: RwSignal<Pairs>,
    fetch: Fut,
    to_pairs: impl FnOnce(&T) -> Pairs + 'static,
    still_wanted: impl Fn() -> bool + 'static,
    toast: ToastService,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn_local(async move {
        match fetch.await {
            Ok(options) if still_wanted() => target.set(to_pairs(&options)),
            Ok(_) => log::debug!("dropped stale option reply"),
            Err(err) => toast.api_error(&err, "Failed to load options"),
        }
    });
}
