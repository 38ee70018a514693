use contracts::system::auth::{UserData, TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist a fresh session
pub fn save_session(token: &str, user: &UserData) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => {
                let _ = storage.set_item(USER_STORAGE_KEY, &json);
            }
            Err(e) => log::error!("failed to store user: {}", e),
        }
    }
}

pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Stored user; a corrupt entry reads as absent
pub fn get_user() -> Option<UserData> {
    let raw = get_local_storage()?.get_item(USER_STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        let _ = storage.remove_item(USER_STORAGE_KEY);
    }
}
