use contracts::shared::api::{ApiError, MessageResponse};
use contracts::system::auth::{LoginRequest, LoginResponse, LOGIN_PATH, LOGOUT_PATH};

use crate::shared::api_client;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    api_client::post_json(LOGIN_PATH, &request).await
}

/// Revoke the token on the server. Failures are only logged.
pub async fn logout() {
    if let Err(e) =
        api_client::post_json::<_, MessageResponse>(LOGOUT_PATH, &serde_json::json!({})).await
    {
        log::warn!("logout request failed: {}", e);
    }
}
