use contracts::shared::api::ApiError;
use contracts::shared::validation::FieldErrors;
use contracts::system::auth::{LoginRequest, INVALID_CREDENTIALS};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::app_config;
use crate::system::auth::{api, context::complete_login, context::use_auth};

fn login_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) | ApiError::Decode(_) => "Something went wrong".to_string(),
        _ => INVALID_CREDENTIALS.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let field_errors = RwSignal::new(FieldErrors::new());
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let title = app_config().ui.app_title;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let errors = request.validate();
        let has_errors = !errors.is_empty();
        field_errors.set(errors);
        if has_errors {
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(request.email, request.password).await {
                Ok(response) => complete_login(response, set_auth_state),
                Err(e) => set_error_message.set(Some(login_error_text(&e))),
            }
            set_is_loading.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            field_errors.with(|errors| {
                errors
                    .get(field)
                    .map(|msg| view! { <div class="form__error">{msg.to_string()}</div> })
            })
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{title}</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate=true>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error("email")}
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {field_error("password")}
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_login_reads_invalid_credentials() {
        assert_eq!(login_error_text(&ApiError::Unauthorized), "Invalid credentials");
        assert_eq!(
            login_error_text(&ApiError::Server {
                status: 422,
                message: "These credentials do not match our records.".into()
            }),
            "Invalid credentials"
        );
        assert_eq!(
            login_error_text(&ApiError::Network("offline".into())),
            "Something went wrong"
        );
    }
}
