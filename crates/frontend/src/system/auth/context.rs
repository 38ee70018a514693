use contracts::system::auth::{LoginResponse, UserData};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_client;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserData>,
}

impl AuthState {
    /// Session persisted by a previous visit
    pub fn restore() -> Self {
        match storage::get_token() {
            Some(token) => Self {
                token: Some(token),
                user: storage::get_user(),
            },
            None => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::restore());

    // Any 401 drops the session; the shell then falls back to the login page.
    api_client::set_unauthorized_handler(move || set_auth_state.set(AuthState::default()));

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store the session returned by `login` and switch the shell to the main layout
pub fn complete_login(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    storage::save_session(&response.token, &response.user);
    log::info!("signed in as {}", response.user.display_name());
    set_auth_state.set(AuthState {
        token: Some(response.token),
        user: Some(response.user),
    });
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    api::logout().await;
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
