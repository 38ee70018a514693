//! Shared REST client.
//!
//! Every request goes through here so the API base, the bearer token and the
//! error mapping live in one place. Paths are relative to `api.base_url`
//! (e.g. `"design-type"`, `"common/get-states"`).

use contracts::shared::api::{ApiError, ItemResponse, ListQuery, ListResponse, MessageResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use web_sys::FormData;

use super::config::api_url;
use crate::system::auth::storage;

thread_local! {
    static ON_UNAUTHORIZED: RefCell<Option<Box<dyn Fn()>>> = RefCell::new(None);
}

/// Installed once by the auth provider; runs after the stored session was
/// dropped because the server answered 401.
pub fn set_unauthorized_handler(handler: impl Fn() + 'static) {
    ON_UNAUTHORIZED.with(|slot| *slot.borrow_mut() = Some(Box::new(handler)));
}

fn session_expired() {
    log::warn!("session expired, clearing stored credentials");
    storage::clear_session();
    ON_UNAUTHORIZED.with(|slot| {
        if let Some(handler) = slot.borrow().as_ref() {
            handler();
        }
    });
}

/// Percent-encodes every segment of a relative path.
pub fn encode_path(path: &str) -> String {
    path.trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn url_for(path: &str) -> String {
    api_url(&encode_path(path))
}

fn with_headers(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !(200..300).contains(&status) {
        let err = ApiError::from_response(status, &body);
        if err.is_unauthorized() {
            session_expired();
        }
        return Err(err);
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn execute<T: DeserializeOwned>(
    method: &str,
    path: &str,
    request: Result<Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let result = match request {
        Ok(request) => match request.send().await {
            Ok(response) => decode(response).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        },
        Err(e) => Err(ApiError::Network(e.to_string())),
    };

    if let Err(err) = &result {
        log::error!("{} {} failed: {}", method, path, err);
    }
    result
}

// ============================================================================
// Verbs
// ============================================================================

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = with_headers(Request::get(&url_for(path))).build();
    execute("GET", path, request).await
}

/// `GET` of a `{ data }` envelope.
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get::<ItemResponse<T>>(path).await.map(|envelope| envelope.data)
}

/// `GET` of a paged `{ data, meta }` list.
pub async fn get_list<T: DeserializeOwned>(
    path: &str,
    query: &ListQuery,
) -> Result<ListResponse<T>, ApiError> {
    let params = serde_qs::to_string(&query.to_params())
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let url = format!("{}?{}", url_for(path), params);
    let request = with_headers(Request::get(&url)).build();
    execute("GET", path, request).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_headers(Request::post(&url_for(path))).json(body);
    execute("POST", path, request).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_headers(Request::put(&url_for(path))).json(body);
    execute("PUT", path, request).await
}

/// `POST` of a multipart body. The browser sets the boundary header.
pub async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    form: &FormData,
) -> Result<T, ApiError> {
    let request = with_headers(Request::post(&url_for(path))).body(form.clone());
    execute("POST", path, request).await
}

// ============================================================================
// Mutations answering `{ success, message }`
// ============================================================================

pub async fn create<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    post_json::<B, MessageResponse>(path, body)
        .await?
        .into_result()
}

pub async fn update<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    put_json::<B, MessageResponse>(path, body)
        .await?
        .into_result()
}

pub async fn submit_multipart(path: &str, form: &FormData) -> Result<String, ApiError> {
    post_multipart::<MessageResponse>(path, form)
        .await?
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_keeps_separators() {
        assert_eq!(encode_path("/design-type/12"), "design-type/12");
        assert_eq!(
            encode_path("common/get-areas/sales executive"),
            "common/get-areas/sales%20executive"
        );
    }
}
