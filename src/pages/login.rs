//! Login page: email/password form posting to the session endpoint.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, AuthCheckError};
use crate::net::types::LoginData;
use crate::routing;
use crate::state::auth::AuthState;

/// Login page — submits credentials and stores the returned user in the
/// session context on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let data = LoginData {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if data.email.is_empty() || data.password.is_empty() {
            error.set(Some("Email and password are required.".to_owned()));
            return;
        }

        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&data).await {
                Ok(user) => {
                    auth.update(|state| state.sign_in(user));
                    navigate(routing::ROOT_PATH, NavigateOptions::default());
                }
                Err(AuthCheckError::Denied(_)) => {
                    error.set(Some("Invalid email or password.".to_owned()));
                }
                Err(_) => {
                    error.set(Some("Could not reach the server. Try again.".to_owned()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"School Portal"</h1>
            <form class="auth-form" on:submit=on_submit>
                <h2>"Sign in"</h2>

                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "No account yet? "
                <a href=routing::REGISTER_PATH>"Create one"</a>
            </p>
        </div>
    }
}
